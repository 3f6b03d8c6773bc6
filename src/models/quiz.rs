use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub choices: [&'static str; 4],
    pub answer: &'static str,
    pub explanation: &'static str,
}

pub static QUESTIONS: [QuizQuestion; 7] = [
    QuizQuestion {
        question: "What gas is the primary driver of recent climate change?",
        choices: ["Nitrogen", "Carbon Dioxide", "Oxygen", "Helium"],
        answer: "Carbon Dioxide",
        explanation: "CO₂ emissions from burning fossil fuels have increased greenhouse effect.",
    },
    QuizQuestion {
        question: "Which layer of the atmosphere contains most of Earth's weather?",
        choices: ["Mesosphere", "Stratosphere", "Troposphere", "Thermosphere"],
        answer: "Troposphere",
        explanation: "The troposphere, the lowest layer, is where most weather happens.",
    },
    QuizQuestion {
        question: "Which phenomenon causes nights to be warmer in cities than rural areas?",
        choices: ["Urban Heat Island", "Ozone Layer", "Volcanic Ash", "Green Flash"],
        answer: "Urban Heat Island",
        explanation: "Concrete and infrastructure absorb heat and slow cooling at night.",
    },
    QuizQuestion {
        question: "What is relative humidity a measure of?",
        choices: [
            "Amount of water vapor in the air vs. maximum possible at that temp",
            "Absolute humidity",
            "Rainfall amount",
            "Wind moisture",
        ],
        answer: "Amount of water vapor in the air vs. maximum possible at that temp",
        explanation: "Relative humidity is the current vapor amount divided by max at that temperature.",
    },
    QuizQuestion {
        question: "Which of these is a feedback loop that accelerates warming?",
        choices: [
            "Ice albedo feedback",
            "Cloud cover increasing",
            "More volcanic eruptions",
            "More aerosols",
        ],
        answer: "Ice albedo feedback",
        explanation: "Melting ice reduces reflectivity, causing more absorption of sunlight, speeding warming.",
    },
    QuizQuestion {
        question: "Which region is warming faster than the global average?",
        choices: ["Tropics", "Equator", "Polar regions", "Temperate zones"],
        answer: "Polar regions",
        explanation: "Arctic and Antarctic are warming disproportionately (polar amplification).",
    },
    QuizQuestion {
        question: "What human activity is the largest source of CO₂ emissions?",
        choices: [
            "Deforestation",
            "Air travel",
            "Electricity & heat production",
            "Livestock farming",
        ],
        answer: "Electricity & heat production",
        explanation: "Burning fossil fuels for electricity/heat is the top CO₂ emitter sector.",
    },
];

/// Per-session quiz progress. Stored in the session store between requests,
/// mutated only through [`apply_submit`] and restart (which is just
/// [`QuizState::new`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct QuizState {
    pub current_index: usize,
    pub score: usize,
    pub answers: Vec<String>,
    pub finished: bool,
}

impl QuizState {
    pub fn new() -> QuizState {
        QuizState::default()
    }

    pub fn current_question<'a>(&self, questions: &'a [QuizQuestion]) -> Option<&'a QuizQuestion> {
        if self.finished {
            return None;
        }
        questions.get(self.current_index)
    }
}

/// One step of the quiz. Returns the successor state; the input state is
/// left untouched so the transition can be unit tested without a session.
pub fn apply_submit(state: &QuizState, questions: &[QuizQuestion], choice: &str) -> QuizState {
    let Some(question) = state.current_question(questions) else {
        // Submitting once the quiz is finished changes nothing.
        return state.clone();
    };
    let mut next = state.clone();
    if choice == question.answer {
        next.score += 1;
    }
    next.answers.push(choice.to_string());
    next.current_index += 1;
    next.finished = next.current_index == questions.len();
    next
}

pub struct QuestionReview<'a> {
    pub question: &'a QuizQuestion,
    pub user_answer: &'a str,
    pub was_correct: bool,
}

pub struct QuizSummary<'a> {
    pub score: usize,
    pub total: usize,
    pub per_question: Vec<QuestionReview<'a>>,
}

/// Results screen data, only available once every question has been answered.
pub fn summary<'a>(state: &'a QuizState, questions: &'a [QuizQuestion]) -> Option<QuizSummary<'a>> {
    if !state.finished {
        return None;
    }
    let per_question = questions
        .iter()
        .zip(&state.answers)
        .map(|(question, answer)| QuestionReview {
            question,
            user_answer: answer,
            was_correct: answer.as_str() == question.answer,
        })
        .collect();
    Some(QuizSummary {
        score: state.score,
        total: questions.len(),
        per_question,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn correct(index: usize) -> &'static str {
        QUESTIONS[index].answer
    }

    fn wrong(index: usize) -> &'static str {
        QUESTIONS[index]
            .choices
            .iter()
            .copied()
            .find(|choice| *choice != QUESTIONS[index].answer)
            .unwrap()
    }

    #[test]
    fn questions_list_is_consistent() {
        assert_eq!(QUESTIONS.len(), 7);
        for question in &QUESTIONS {
            assert!(question.choices.contains(&question.answer));
        }
    }

    #[test]
    fn answering_everything_correctly_finishes_with_full_score() {
        let mut state = QuizState::new();
        for index in 0..QUESTIONS.len() {
            assert!(!state.finished);
            state = apply_submit(&state, &QUESTIONS, correct(index));
        }
        assert!(state.finished);
        assert_eq!(state.score, QUESTIONS.len());
        assert_eq!(state.answers.len(), QUESTIONS.len());
        assert!(state.current_question(&QUESTIONS).is_none());
    }

    #[test]
    fn score_counts_only_exact_matches() {
        let mut state = QuizState::new();
        state = apply_submit(&state, &QUESTIONS, "carbon dioxide");
        assert_eq!(state.score, 0);
        assert_eq!(state.current_index, 1);
        state = apply_submit(&state, &QUESTIONS, correct(1));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn questions_are_served_in_order() {
        let mut state = QuizState::new();
        for index in 0..QUESTIONS.len() {
            let question = state.current_question(&QUESTIONS).unwrap();
            assert_eq!(question.question, QUESTIONS[index].question);
            state = apply_submit(&state, &QUESTIONS, wrong(index));
        }
    }

    #[test]
    fn submit_after_finished_is_ignored() {
        let mut state = QuizState::new();
        for index in 0..QUESTIONS.len() {
            state = apply_submit(&state, &QUESTIONS, correct(index));
        }
        let after = apply_submit(&state, &QUESTIONS, correct(0));
        assert_eq!(after, state);
    }

    #[test]
    fn restart_returns_the_initial_state() {
        let mut state = QuizState::new();
        for index in 0..QUESTIONS.len() {
            state = apply_submit(&state, &QUESTIONS, correct(index));
        }
        assert!(state.finished);
        let restarted = QuizState::new();
        assert_eq!(restarted.current_index, 0);
        assert_eq!(restarted.score, 0);
        assert!(restarted.answers.is_empty());
        assert!(!restarted.finished);
        assert_eq!(
            restarted.current_question(&QUESTIONS).unwrap().question,
            QUESTIONS[0].question
        );
    }

    #[test]
    fn summary_is_only_available_when_finished() {
        let state = apply_submit(&QuizState::new(), &QUESTIONS, correct(0));
        assert!(summary(&state, &QUESTIONS).is_none());
    }

    #[test]
    fn summary_zips_questions_with_recorded_answers() {
        let mut state = QuizState::new();
        for index in 0..3 {
            state = apply_submit(&state, &QUESTIONS, correct(index));
        }
        for index in 3..QUESTIONS.len() {
            state = apply_submit(&state, &QUESTIONS, wrong(index));
        }
        let summary = summary(&state, &QUESTIONS).unwrap();
        assert_eq!(summary.score, 3);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.per_question.len(), 7);
        for (index, review) in summary.per_question.iter().enumerate() {
            assert_eq!(review.question.question, QUESTIONS[index].question);
            assert_eq!(review.user_answer, state.answers[index]);
            assert_eq!(review.was_correct, index < 3);
        }
    }
}
