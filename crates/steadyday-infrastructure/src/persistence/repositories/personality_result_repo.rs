use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use steadyday_domain::personality::{
    PersonalityResult, PersonalityResultRepository, PersonalityType, TypeScore,
};
use steadyday_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct PersonalityResultRow {
    owner_id: String,
    personality_type: i64,
    scores: String,
    completed_at: DateTime<Utc>,
}

impl PersonalityResultRow {
    fn try_into_result(self) -> Result<PersonalityResult, DomainError> {
        let personality_type = u8::try_from(self.personality_type)
            .to_serialization_err("personality type")
            .and_then(PersonalityType::from_number)?;

        Ok(PersonalityResult::restore(
            UserId::from_string(&self.owner_id),
            personality_type,
            decode_scores(&self.scores)?,
            self.completed_at,
        ))
    }
}

/// Scores are stored as nine comma-separated totals in type order.
fn encode_scores(scores: &[TypeScore]) -> String {
    scores
        .iter()
        .map(|s| s.score.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn decode_scores(raw: &str) -> Result<Vec<TypeScore>, DomainError> {
    let totals = raw
        .split(',')
        .map(|part| part.trim().parse::<u32>().to_serialization_err("score"))
        .collect::<Result<Vec<_>, _>>()?;

    if totals.len() != PersonalityType::ALL.len() {
        return Err(DomainError::Serialization(format!(
            "Expected {} scores, found {}",
            PersonalityType::ALL.len(),
            totals.len()
        )));
    }

    Ok(PersonalityType::ALL
        .iter()
        .zip(totals)
        .map(|(personality_type, score)| TypeScore {
            personality_type: *personality_type,
            score,
        })
        .collect())
}

pub struct SqlitePersonalityResultRepository {
    base: SqliteRepositoryBase,
}

impl SqlitePersonalityResultRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl PersonalityResultRepository for SqlitePersonalityResultRepository {
    async fn upsert(&self, result: &PersonalityResult) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO personality_results (owner_id, personality_type, scores, completed_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(owner_id) DO UPDATE SET
                personality_type = excluded.personality_type,
                scores = excluded.scores,
                completed_at = excluded.completed_at
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(result.owner_id().as_str())
                    .bind(i64::from(result.personality_type().number()))
                    .bind(encode_scores(result.scores()))
                    .bind(result.completed_at()),
                "Upsert personality result",
            )
            .await?;

        Ok(())
    }

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Option<PersonalityResult>, DomainError> {
        let query = r#"
            SELECT owner_id, personality_type, scores, completed_at
            FROM personality_results
            WHERE owner_id = ?1
        "#;

        let row: Option<PersonalityResultRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(owner_id.as_str()),
                "Find personality result",
            )
            .await?;

        row.map(|r| r.try_into_result()).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_decode_in_type_order() {
        let scores = decode_scores("1,2,3,4,5,6,7,8,9").unwrap();

        assert_eq!(scores.len(), 9);
        assert_eq!(scores[6].personality_type, PersonalityType::Seven);
        assert_eq!(scores[6].score, 7);
        assert_eq!(encode_scores(&scores), "1,2,3,4,5,6,7,8,9");
    }

    #[test]
    fn test_malformed_scores_are_serialization_errors() {
        assert!(matches!(
            decode_scores("1,2,3"),
            Err(DomainError::Serialization(_))
        ));
        assert!(matches!(
            decode_scores("1,2,x,4,5,6,7,8,9"),
            Err(DomainError::Serialization(_))
        ));
    }
}
