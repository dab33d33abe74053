//! The `quizstore init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizstore.toml").exists() {
        println!("quizstore.toml already exists, skipping.");
    } else {
        std::fs::write("quizstore.toml", SAMPLE_CONFIG)?;
        println!("Created quizstore.toml");
    }

    let catalog_path = std::path::Path::new("data.json");
    if catalog_path.exists() {
        println!("data.json already exists, skipping.");
    } else {
        std::fs::write(catalog_path, SAMPLE_CATALOG)?;
        println!("Created data.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizstore fetch");
    println!("  2. Run: quizstore list");
    println!("  3. Run: quizstore select 1");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizstore configuration

# HTTP(S) URL or local path of the catalog document.
catalog_url = "./data.json"
# catalog_url = "http://localhost:3000/data.json"

# Where the session state is persisted between runs.
state_dir = "./.quizstore"
storage_key = "quizz"
"#;

const SAMPLE_CATALOG: &str = r#"{
  "quizzes": [
    {
      "title": "Effort",
      "icon": "./assets/images/icon-effort.svg",
      "questions": [
        {
          "id": 1,
          "question": "When a task gets hard, what do you usually do?",
          "options": ["Keep going until it is done", "Take a break and maybe return", "Leave it for someone else"],
          "answer": "Keep going until it is done"
        },
        {
          "id": 2,
          "question": "How do you prepare for an exam?",
          "options": ["Study on a schedule for weeks", "Cram the night before", "Hope the questions are easy"],
          "answer": "Study on a schedule for weeks"
        },
        {
          "id": 3,
          "question": "You failed at something important. What next?",
          "options": ["Figure out why and try again", "Try again the same way", "Decide it was not meant to be"],
          "answer": "Figure out why and try again"
        },
        {
          "id": 4,
          "question": "How often do you set goals for yourself?",
          "options": ["Every week", "A few times a year", "Rarely"],
          "answer": "Every week"
        },
        {
          "id": 5,
          "question": "A new skill would help your work. You...",
          "options": ["Start learning it today", "Add it to a someday list", "Wait until it is required"],
          "answer": "Start learning it today"
        },
        {
          "id": 6,
          "question": "What decides whether you succeed?",
          "options": ["Effort and persistence", "A mix of effort and luck", "Mostly luck"],
          "answer": "Effort and persistence"
        },
        {
          "id": 7,
          "question": "How do you handle boring but necessary work?",
          "options": ["Finish it first", "Do it when I feel like it", "Put it off as long as possible"],
          "answer": "Finish it first"
        },
        {
          "id": 8,
          "question": "Someone gives you critical feedback. You...",
          "options": ["Use it to improve", "Think about it for a while", "Ignore it"],
          "answer": "Use it to improve"
        },
        {
          "id": 9,
          "question": "How do you spend a free afternoon?",
          "options": ["On a project I care about", "Half rest, half project", "Doing nothing in particular"],
          "answer": "On a project I care about"
        },
        {
          "id": 10,
          "question": "When progress is slow, you...",
          "options": ["Stay consistent", "Slow down too", "Give up"],
          "answer": "Stay consistent"
        }
      ]
    },
    {
      "title": "HTML",
      "icon": "./assets/images/icon-html.svg",
      "questions": [
        {
          "id": 1,
          "question": "What does HTML stand for?",
          "options": ["Hyper Text Markup Language", "Hyper Trainer Marking Language", "Hyper Texts Marking Language"],
          "answer": "Hyper Text Markup Language"
        },
        {
          "id": 2,
          "question": "Which element holds the main content of a page?",
          "options": ["<main>", "<section>", "<body>"],
          "answer": "<main>"
        },
        {
          "id": 3,
          "question": "Which attribute gives an image alternative text?",
          "options": ["title", "alt", "src"],
          "answer": "alt"
        }
      ]
    }
  ]
}
"#;
