use edumind_print::{QuizData, TestPaper};
use serde_json::{Value, json};

/// Quiz JSON as the generator service returns it
pub fn quiz_json(questions: usize) -> Value {
    let questions: Vec<Value> = (1..=questions)
        .map(|i| {
            json!({
                "question": format!("Which gas do plants absorb in experiment {}?", i),
                "options": ["Oxygen", "Carbon dioxide", "Nitrogen", "Helium"],
                "correctAnswer": "Carbon dioxide",
                "explanation": "Plants take in carbon dioxide for photosynthesis."
            })
        })
        .collect();
    json!({ "title": "Plant Biology", "questions": questions })
}

pub fn quiz(questions: usize) -> QuizData {
    serde_json::from_value(quiz_json(questions)).expect("fixture quiz is valid")
}

/// Test paper JSON with a short-answer and an MCQ section
pub fn test_paper_json() -> Value {
    json!({
        "title": "Physics Mid-Term Examination",
        "duration": "3 Hours",
        "totalMarks": 70,
        "sections": [
            {
                "sectionTitle": "Section A: Multiple Choice",
                "questions": [
                    { "id": 1, "text": "The SI unit of power is", "marks": 1, "type": "MCQ",
                      "options": ["Watt", "Joule", "Newton", "Pascal"], "answer": "Watt" },
                    { "id": 2, "text": "Which quantity is a vector?", "marks": 1, "type": "MCQ",
                      "options": ["Speed", "Mass", "Velocity", "Energy"], "answer": "Velocity",
                      "explanation": "Velocity has magnitude and direction." }
                ]
            },
            {
                "sectionTitle": "Section B: Short Answers",
                "questions": [
                    { "id": 3, "text": "State Newton's second law of motion.", "marks": 2.5, "type": "Short",
                      "answer": "Force equals the rate of change of momentum." },
                    { "id": 4, "text": "Derive the equations of uniformly accelerated motion.", "marks": 5,
                      "type": "Long", "answer": "Start from the definition of acceleration." }
                ]
            },
            { "sectionTitle": "Section C: Empty", "questions": [] }
        ]
    })
}

pub fn test_paper() -> TestPaper {
    serde_json::from_value(test_paper_json()).expect("fixture test paper is valid")
}
