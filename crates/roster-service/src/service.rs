use crate::generator::IdGenerator;
use crate::policy::{required, DirectoryPolicy};
use async_trait::async_trait;
use jiff::Timestamp;
use roster_core::repository::Located;
use roster_core::{
    Deleted, Employee, EmployeeDirectory, EmployeePatch, Field, Locator, NewEmployee,
    RecordStore, RosterError,
};
use std::sync::Arc;
use tracing::{debug, info, trace};

type Result<T> = std::result::Result<T, RosterError>;

/// A concrete implementation of the [`EmployeeDirectory`] trait.
///
/// This service wraps a [`RecordStore`] and an [`IdGenerator`] to handle:
/// - required-field and field-policy checks
/// - employee code and email uniqueness
/// - merge semantics of updates, which never touch the employee code
///
/// Note: uniqueness is checked with separate store calls before the write.
/// Nothing serializes two writers, so concurrent creates with the same code
/// or email can both pass the check and both be stored.
#[derive(Debug)]
pub struct RecordService<S, G> {
    store: Arc<S>,
    generator: G,
    policy: DirectoryPolicy,
}

impl<S: RecordStore, G: IdGenerator> RecordService<S, G> {
    /// Creates a service with the default [`DirectoryPolicy`].
    pub fn new(store: S, generator: G) -> Self {
        Self::with_policy(store, generator, DirectoryPolicy::default())
    }

    /// Creates a service with custom field rules.
    pub fn with_policy(store: S, generator: G, policy: DirectoryPolicy) -> Self {
        Self::with_shared_store(Arc::new(store), generator, policy)
    }

    /// Creates a service over a store handle that the caller keeps as well.
    pub fn with_shared_store(store: Arc<S>, generator: G, policy: DirectoryPolicy) -> Self {
        Self {
            store,
            generator,
            policy,
        }
    }

    /// Returns the store backing this service.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

#[async_trait]
impl<S: RecordStore, G: IdGenerator> EmployeeDirectory for RecordService<S, G> {
    async fn create(&self, input: NewEmployee) -> Result<Employee> {
        let employee_code = required(&input.employee_code, Field::EmployeeCode)?;
        let email = required(&input.email, Field::Email)?;
        let department = input.department.trim();

        self.policy.check_email(email)?;
        self.policy.check_salary(input.salary)?;
        self.policy.check_department(department)?;

        if self.store.find_by_code(employee_code).await?.is_some() {
            debug!(employee_code, "employee code already taken");
            return Err(RosterError::DuplicateEmployeeCode(employee_code.to_owned()));
        }

        if self.store.find_by_email(email).await?.is_some() {
            debug!(employee_code, email, "email already taken");
            return Err(RosterError::DuplicateEmail(email.to_owned()));
        }

        let now = Timestamp::now();
        let record = Employee {
            id: self.generator.generate(),
            employee_code: employee_code.to_owned(),
            name: input.name.trim().to_owned(),
            email: email.to_owned(),
            department: department.to_owned(),
            salary: input.salary,
            created_at: now,
            updated_at: now,
        };

        self.store.append(record.clone()).await?;

        info!(id = %record.id, employee_code = %record.employee_code, "employee created");
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Employee>> {
        let records = self.store.all().await?;
        trace!(count = records.len(), "listing employees");
        Ok(records)
    }

    async fn update(&self, employee_code: &str, patch: EmployeePatch) -> Result<Employee> {
        let employee_code = employee_code.trim();

        let Some(Located { index, record }) = self.store.find_by_code(employee_code).await? else {
            debug!(employee_code, "update target not found");
            return Err(RosterError::NotFound(Locator::by_code(employee_code)));
        };

        let patch = self.policy.normalize_patch(patch)?;

        // Keeping its own email is not a conflict for the record being updated.
        if let Some(email) = patch.email.as_deref() {
            if let Some(holder) = self.store.find_by_email(email).await? {
                if holder.record.employee_code != record.employee_code {
                    debug!(employee_code, email, "email held by another employee");
                    return Err(RosterError::DuplicateEmail(email.to_owned()));
                }
            }
        }

        let mut updated = record;
        patch.merge_into(&mut updated);
        updated.updated_at = Timestamp::now();

        self.store.replace_at(index, updated.clone()).await?;

        info!(id = %updated.id, employee_code = %updated.employee_code, "employee updated");
        Ok(updated)
    }

    async fn delete(&self, locator: &Locator) -> Result<Deleted> {
        let locator = match locator {
            Locator::ByEmployeeCode(code) => Locator::by_code(code.trim()),
            Locator::ByInternalId(id) => Locator::ByInternalId(id.clone()),
        };

        let Some(located) = self.store.locate(&locator).await? else {
            debug!(%locator, "delete target not found");
            return Err(RosterError::NotFound(locator));
        };

        let record = self.store.remove_at(located.index).await?;

        info!(id = %record.id, employee_code = %record.employee_code, "employee deleted");
        Ok(Deleted { record })
    }
}
