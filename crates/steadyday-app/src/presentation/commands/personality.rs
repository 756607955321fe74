use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::personality_commands::*;
use crate::application::dtos::{ClassificationDto, PersonalityResultDto, QuestionDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub fn get_questions(state: &AppState) -> Vec<QuestionDto> {
    state.queries.personality.questions()
}

/// Classify 1-5 answers given in question order and keep the result
pub async fn submit_questionnaire(
    state: &AppState,
    owner_id: &str,
    answers: Vec<u8>,
) -> Result<ClassificationDto, CommandError> {
    let command = SubmitQuestionnaireCommand {
        owner_id: owner_id.to_string(),
        answers,
    };

    let dto = state
        .command_handlers
        .submit_questionnaire
        .handle(command)
        .await?;
    Ok(dto)
}

/// The owner's stored result; a not-found error before the first questionnaire
pub async fn get_personality_result(
    state: &AppState,
    owner_id: &str,
) -> Result<PersonalityResultDto, CommandError> {
    state
        .queries
        .personality
        .stored_result(owner_id)
        .await?
        .ok_or_else(|| {
            CommandError::not_found(format!("No questionnaire result for {}", owner_id))
        })
}
