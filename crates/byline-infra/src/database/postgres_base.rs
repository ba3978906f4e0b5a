use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

use byline_core::error::{RepoError, ValidationError};
use byline_core::ports::BaseRepository;

/// Schema constraint names and the validation kind each one carries,
/// matching the migration exactly.
const CONSTRAINT_KINDS: [(&str, ValidationError); 5] = [
    ("unique_author_name", ValidationError::DuplicateName),
    ("valid_phone_number_length", ValidationError::InvalidPhoneFormat),
    ("content_length_constraint", ValidationError::ContentTooShort),
    ("summary_length_constraint", ValidationError::SummaryTooLong),
    ("valid_category_constraint", ValidationError::InvalidCategory),
];

/// Map a write error to a repository error, translating named constraint
/// violations back to their validation kinds so callers see the same
/// taxonomy as for field-level rejections.
pub(crate) fn map_write_err(err: DbErr) -> RepoError {
    let msg = err.to_string();

    if let Some((_, kind)) = CONSTRAINT_KINDS
        .iter()
        .find(|(name, _)| msg.contains(name))
    {
        return RepoError::Constraint(*kind);
    }
    // Unnamed unique violations can only come from the author name index.
    if msg.contains("duplicate key") || msg.contains("unique") {
        return RepoError::Constraint(ValidationError::DuplicateName);
    }
    RepoError::Query(msg)
}

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        // IDs are assigned in the domain, so an UPDATE is attempted first
        // and a miss falls through to INSERT. The database enforces its
        // own constraints on either path.
        let active_model: E::ActiveModel = entity.into();

        let model = match active_model.clone().update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => active_model
                .insert(&self.db)
                .await
                .map_err(map_write_err)?,
            Err(e) => return Err(map_write_err(e)),
        };

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint_err(name: &str) -> DbErr {
        DbErr::Custom(format!(
            "error returned from database: new row for relation \"posts\" violates check constraint \"{name}\""
        ))
    }

    #[test]
    fn maps_named_constraints_to_validation_kinds() {
        for (name, kind) in CONSTRAINT_KINDS {
            match map_write_err(constraint_err(name)) {
                RepoError::Constraint(mapped) => assert_eq!(mapped, kind, "{name}"),
                other => panic!("expected Constraint for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn maps_anonymous_unique_violation_to_duplicate_name() {
        let err = DbErr::Custom(
            "error returned from database: duplicate key value violates unique constraint"
                .to_owned(),
        );
        assert!(matches!(
            map_write_err(err),
            RepoError::Constraint(ValidationError::DuplicateName)
        ));
    }

    #[test]
    fn other_errors_stay_query_errors() {
        let err = DbErr::Custom("connection reset by peer".to_owned());
        assert!(matches!(map_write_err(err), RepoError::Query(_)));
    }
}
