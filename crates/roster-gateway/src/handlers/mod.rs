mod employee;
mod health;

pub use employee::{
    create_employee_handler, delete_employee_by_code_handler, delete_employee_by_id_handler,
    list_employees_handler, update_employee_handler,
};
pub use health::health_handler;
