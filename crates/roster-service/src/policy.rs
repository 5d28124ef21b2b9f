use roster_core::email::has_email_shape;
use roster_core::{EmployeePatch, Field, RosterError, DEPARTMENT_CATALOG};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, RosterError>;

/// How the `department` field is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepartmentPolicy {
    /// Any text is accepted, including an empty value.
    #[default]
    FreeText,
    /// The value must be one of [`DEPARTMENT_CATALOG`].
    Catalog,
}

/// Field rules applied by the record service on create and update.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct DirectoryPolicy {
    #[builder(default)]
    pub departments: DepartmentPolicy,
}

impl DirectoryPolicy {
    /// Checks a department value that has already been trimmed.
    pub fn check_department(&self, department: &str) -> Result<()> {
        match self.departments {
            DepartmentPolicy::FreeText => Ok(()),
            DepartmentPolicy::Catalog if DEPARTMENT_CATALOG.contains(&department) => Ok(()),
            DepartmentPolicy::Catalog => {
                Err(RosterError::UnknownDepartment(department.to_owned()))
            }
        }
    }

    /// Checks an email value that has already passed [`required`].
    pub fn check_email(&self, email: &str) -> Result<()> {
        if !has_email_shape(email) {
            return Err(RosterError::InvalidEmail(email.to_owned()));
        }
        Ok(())
    }

    pub fn check_salary(&self, salary: f64) -> Result<()> {
        if !salary.is_finite() || salary < 0.0 {
            return Err(RosterError::InvalidSalary(salary));
        }
        Ok(())
    }

    /// Trims the supplied fields of a patch and checks them with the same
    /// rules as a create.
    pub fn normalize_patch(&self, patch: EmployeePatch) -> Result<EmployeePatch> {
        let email = match patch.email {
            Some(email) => {
                let email = required(&email, Field::Email)?;
                self.check_email(email)?;
                Some(email.to_owned())
            }
            None => None,
        };

        let department = match patch.department {
            Some(department) => {
                let department = department.trim();
                self.check_department(department)?;
                Some(department.to_owned())
            }
            None => None,
        };

        if let Some(salary) = patch.salary {
            self.check_salary(salary)?;
        }

        Ok(EmployeePatch {
            name: patch.name.map(|name| name.trim().to_owned()),
            email,
            department,
            salary: patch.salary,
        })
    }
}

/// Returns the trimmed value, or `MissingField` if nothing is left.
pub fn required(value: &str, field: Field) -> Result<&str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RosterError::MissingField(field));
    }
    Ok(value)
}
