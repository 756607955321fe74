mod classifier;
mod profile;
mod question;
mod repository;
mod result;
mod types;


pub use classifier::{classify, Classification, LikertAnswer, TypeScore};
pub use profile::{profile_for, TypeProfile};
pub use question::{question_bank, Question, QuestionId};
pub use repository::PersonalityResultRepository;
pub use result::PersonalityResult;
pub use types::PersonalityType;
