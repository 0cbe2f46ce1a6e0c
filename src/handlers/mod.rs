pub mod generation_handler;
pub mod info_handler;

pub use generation_handler::{
    generate_fill_in_blanks, generate_mcqs, generate_questions, generate_topic_mcqs,
};
pub use info_handler::{health, info, root};
