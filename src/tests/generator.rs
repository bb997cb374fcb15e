#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::{
        common::{error::ServerError, models::ResponseCode},
        quiz::{generator::derive_quiz, models::DerivedQuestion},
        tests::common::{question, questions},
    };

    #[test]
    fn returns_exactly_the_requested_amount() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let quiz = derive_quiz(questions(5), 5, &mut rng).unwrap();
        assert_eq!(quiz.len(), 5);
    }

    #[test]
    fn answers_are_a_permutation_of_all_choices() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let sample = questions(8);
        let quiz = derive_quiz(sample.clone(), 8, &mut rng).unwrap();

        for (original, derived) in sample.iter().zip(quiz.iter()) {
            assert_eq!(original.id, derived.id);
            assert_eq!(original.question, derived.question);

            let mut expected = original.incorrect_answers.clone();
            expected.push(original.correct_answer.clone());
            expected.sort();

            let mut actual = derived.answers.clone();
            actual.sort();

            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn derived_questions_never_carry_the_correct_answer() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let quiz = derive_quiz(questions(3), 3, &mut rng).unwrap();
        let json = serde_json::to_value(&quiz).unwrap();

        for item in json.as_array().unwrap() {
            let object = item.as_object().unwrap();
            assert!(!object.contains_key("correct_answer"));
            assert!(!object.contains_key("incorrect_answers"));
            assert!(object.contains_key("answers"));
        }
    }

    #[test]
    fn correct_answer_position_varies() {
        let mut positions = std::collections::HashSet::new();

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let derived = DerivedQuestion::from_question(question(1), &mut rng);
            let position = derived
                .answers
                .iter()
                .position(|a| a == "Correct 1")
                .unwrap();
            positions.insert(position);
        }

        assert!(positions.len() > 1);
    }

    #[test]
    fn insufficient_questions_reports_both_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let error = derive_quiz(questions(3), 10, &mut rng).unwrap_err();

        match &error {
            ServerError::InsufficientQuestions {
                requested,
                available,
            } => {
                assert_eq!(*requested, 10);
                assert_eq!(*available, 3);
            }
            other => panic!("Unexpected error: {}", other),
        }

        assert_eq!(error.code(), ResponseCode::InsufficientQuestions);
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        let message = error.to_string();
        assert!(message.contains("10"));
        assert!(message.contains("3"));
    }

    #[test]
    fn empty_store_is_insufficient() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let error = derive_quiz(Vec::new(), 5, &mut rng).unwrap_err();
        assert!(matches!(
            error,
            ServerError::InsufficientQuestions {
                requested: 5,
                available: 0
            }
        ));
    }
}
