use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::game::score::Score;
use crate::output::mock::MockGameOutput;
use crate::output::Message;
use crate::source::mock::{sample_questions, SAMPLE_CORRECT_OPTION, SAMPLE_WRONG_OPTION};

const QUESTION_DURATION: Duration = Duration::from_secs(30);
const FEEDBACK_DURATION: Duration = Duration::from_secs(1);

struct Context {
    quiz: Quiz<MockGameOutput>,
    score: ScoreHandle,
    output: MockGameOutput,
}

fn build(question_count: usize) -> Context {
    let output = MockGameOutput::new();
    let score: ScoreHandle = Arc::new(RwLock::new(Score::default()));
    let settings = Settings {
        question_duration: QUESTION_DURATION,
        feedback_duration: FEEDBACK_DURATION,
        ..Default::default()
    };
    let definition = QuizDefinition::new(sample_questions(question_count));
    let quiz = Quiz::new(definition, settings, score.clone(), output.clone());
    Context {
        quiz,
        score,
        output,
    }
}

fn is_question_screen(message: &Message) -> bool {
    match message {
        Message::QuestionBegins { .. } => true,
        _ => false,
    }
}

fn is_final_score(message: &Message) -> bool {
    match message {
        Message::FinalScore { .. } => true,
        _ => false,
    }
}

#[test]
fn starts_on_first_question() {
    let ctx = build(3);
    assert_eq!(ctx.quiz.current_index(), 0);
    assert!(ctx.quiz.is_accepting_answers());
    match &ctx.output.flush()[..] {
        [Message::QuestionBegins { number, total, .. }] => {
            assert_eq!(*number, 1);
            assert_eq!(*total, 3);
        }
        other => panic!("unexpected output: {:?}", other),
    }
}

#[test]
fn shows_every_question_before_score_when_timing_out() {
    let question_count = 4;
    let mut ctx = build(question_count);
    for _ in 0..question_count {
        assert!(!ctx.quiz.is_over());
        ctx.quiz.tick(QUESTION_DURATION);
        ctx.quiz.tick(FEEDBACK_DURATION);
    }
    assert!(ctx.quiz.is_over());
    assert_eq!(ctx.output.count_matching(is_question_screen), question_count);
    assert_eq!(ctx.output.count_matching(is_final_score), 1);
    assert!(ctx.output.contains_message(&Message::FinalScore {
        correct: 0,
        total: question_count
    }));
}

#[test]
fn shows_every_question_before_score_when_answering() {
    let question_count = 3;
    let mut ctx = build(question_count);
    for _ in 0..question_count {
        ctx.quiz.answer(SAMPLE_WRONG_OPTION).unwrap();
        ctx.quiz.tick(FEEDBACK_DURATION);
    }
    assert!(ctx.quiz.is_over());
    assert_eq!(ctx.output.count_matching(is_question_screen), question_count);
    assert_eq!(ctx.output.count_matching(is_final_score), 1);
}

#[test]
fn correct_answer_advances_after_feedback_delay() {
    let mut ctx = build(2);
    assert_eq!(
        ctx.quiz.answer(SAMPLE_CORRECT_OPTION).unwrap(),
        Verdict::Correct
    );
    assert_eq!(ctx.score.read().correct, 1);
    assert!(!ctx.quiz.is_accepting_answers());
    assert!(ctx.quiz.answer(SAMPLE_CORRECT_OPTION).is_err());

    ctx.quiz.tick(Duration::from_millis(500));
    assert_eq!(ctx.quiz.current_index(), 0);
    ctx.quiz.tick(Duration::from_millis(500));
    assert_eq!(ctx.quiz.current_index(), 1);
    assert!(ctx.quiz.is_accepting_answers());
    assert_eq!(ctx.score.read().correct, 1);
}

#[test]
fn feedback_shows_verdict_of_last_question() {
    let mut ctx = build(3);
    assert_eq!(ctx.quiz.feedback(), None);

    ctx.quiz.answer(SAMPLE_CORRECT_OPTION).unwrap();
    assert_eq!(ctx.quiz.feedback(), Some(Verdict::Correct));
    ctx.quiz.tick(FEEDBACK_DURATION);
    assert_eq!(ctx.quiz.feedback(), None);

    ctx.quiz.answer(SAMPLE_WRONG_OPTION).unwrap();
    assert_eq!(ctx.quiz.feedback(), Some(Verdict::Incorrect));
    ctx.quiz.tick(FEEDBACK_DURATION);

    ctx.quiz.tick(QUESTION_DURATION);
    assert_eq!(ctx.quiz.feedback(), Some(Verdict::TimedOut));
}

#[test]
fn timeout_advances_without_scoring() {
    let mut ctx = build(2);
    ctx.quiz.tick(QUESTION_DURATION);
    assert!(ctx
        .output
        .contains_message(&Message::TimeUp("right 0".to_owned())));
    ctx.quiz.tick(FEEDBACK_DURATION);
    assert_eq!(ctx.quiz.current_index(), 1);
    assert_eq!(
        *ctx.score.read(),
        Score {
            correct: 0,
            played: 1
        }
    );
}

#[test]
fn final_score_counts_correct_answers() {
    let mut ctx = build(5);
    let answers = [
        Some(SAMPLE_CORRECT_OPTION),
        Some(SAMPLE_WRONG_OPTION),
        None,
        Some(SAMPLE_CORRECT_OPTION),
        Some(SAMPLE_CORRECT_OPTION),
    ];
    for answer in answers.iter() {
        match answer {
            Some(option) => {
                ctx.quiz.answer(*option).unwrap();
            }
            None => ctx.quiz.tick(QUESTION_DURATION),
        }
        ctx.quiz.tick(FEEDBACK_DURATION);
    }
    assert!(ctx.quiz.is_over());
    assert!(ctx.output.contains_message(&Message::FinalScore {
        correct: 3,
        total: 5
    }));
    assert_eq!(
        *ctx.score.read(),
        Score {
            correct: 3,
            played: 5
        }
    );
}

#[test]
fn empty_quiz_goes_straight_to_results() {
    let ctx = build(0);
    assert!(ctx.quiz.is_over());
    assert_eq!(
        ctx.output.flush(),
        [Message::FinalScore {
            correct: 0,
            total: 0
        }]
    );
}

#[test]
fn cannot_answer_once_over() {
    let mut ctx = build(1);
    ctx.quiz.answer(SAMPLE_CORRECT_OPTION).unwrap();
    ctx.quiz.tick(FEEDBACK_DURATION);
    assert!(ctx.quiz.is_over());
    assert!(ctx.quiz.answer(SAMPLE_CORRECT_OPTION).is_err());
}
