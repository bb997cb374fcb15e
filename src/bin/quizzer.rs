use std::process::ExitCode;

use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use trivia_quizzer::{
    client::quiz_client::QuizClient,
    config::config::CONFIG,
    quiz::models::{DEFAULT_AMOUNT, Difficulty, QuizRequest},
    quizzer::state::{Action, QuizState},
};

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, text: &str) -> Option<String> {
    println!("{}", text);
    input.next_line().await.ok().flatten().map(|l| l.trim().to_string())
}

fn render_results(state: &QuizState) {
    if let Some(error) = &state.results_error {
        println!("{}", error);
        return;
    }

    let Some(results) = &state.results else {
        return;
    };

    for (idx, result) in results.results.iter().enumerate() {
        let mark = if result.is_correct { "correct" } else { "wrong" };
        println!(
            "{}. {} -> {} ({}, answer: {})",
            idx + 1,
            result.question,
            result.user_answer,
            mark,
            result.correct_answer
        );
    }

    println!(
        "Score: {}/{} ({}%)",
        results.correct_answers, results.total_questions, results.percentage
    );
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::WARN)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    let client = QuizClient::new(&CONFIG.api_url);
    let mut state = QuizState::new();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    state.apply(Action::CategoriesRequested);
    let categories = client.get_categories().await;
    state.apply(Action::CategoriesLoaded(categories));

    let categories = match (&state.categories, &state.categories_error) {
        (Some(categories), _) if !categories.is_empty() => categories.clone(),
        (_, Some(error)) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
        _ => {
            eprintln!("No categories available. Has the database been seeded?");
            return ExitCode::FAILURE;
        }
    };

    loop {
        for (idx, category) in categories.iter().enumerate() {
            println!("{:>3}. {}", idx + 1, category.name);
        }

        let Some(choice) = prompt(&mut input, "Pick a category number:").await else {
            return ExitCode::SUCCESS;
        };
        let Some(category) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| categories.get(n))
        else {
            println!("Unknown category");
            continue;
        };

        let difficulty = prompt(&mut input, "Difficulty (easy, medium, hard):")
            .await
            .and_then(|d| d.parse::<Difficulty>().ok())
            .unwrap_or(Difficulty::Easy);

        let amount = prompt(&mut input, "How many questions?")
            .await
            .and_then(|a| a.parse::<u16>().ok())
            .unwrap_or(DEFAULT_AMOUNT);

        let request = QuizRequest {
            amount,
            category: category.name.clone(),
            difficulty,
        };

        state.apply(Action::QuizRequested);
        let quiz = client.get_quiz(&request).await;
        state.apply(Action::QuizLoaded(quiz));

        let Some(quiz) = state.quiz.clone() else {
            println!("{}", state.quiz_error.as_deref().unwrap_or("Unable to get quiz."));
            state.apply(Action::Reset);
            continue;
        };

        for (idx, question) in quiz.iter().enumerate() {
            println!("\nQuestion {}/{}: {}", idx + 1, quiz.len(), question.question);
            for (n, answer) in question.answers.iter().enumerate() {
                println!("  {}. {}", n + 1, answer);
            }

            loop {
                let Some(choice) = prompt(&mut input, "Your answer:").await else {
                    return ExitCode::SUCCESS;
                };
                let picked = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|n| question.answers.get(n));

                if let Some(answer) = picked {
                    state.apply(Action::AnswerSelected {
                        question_id: question.id,
                        answer: answer.clone(),
                    });
                    break;
                }
                println!("Pick one of the listed numbers");
            }
        }

        if state.is_complete() && state.apply(Action::ResultsRequested) {
            let results = client.score_quiz(&state.user_answers).await;
            state.apply(Action::ResultsLoaded(results));
        }
        render_results(&state);

        let again = prompt(&mut input, "\nPlay again? (y/n)").await;
        if !matches!(again.as_deref(), Some("y") | Some("yes")) {
            return ExitCode::SUCCESS;
        }
        state.apply(Action::Reset);
    }
}
