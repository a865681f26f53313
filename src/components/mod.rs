//! UI Components
//!
//! Leptos components for the todo list view.

mod delete_confirm_button;
mod new_todo_form;
mod todo_footer;
mod todo_list;
mod todo_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use new_todo_form::NewTodoForm;
pub use todo_footer::TodoFooter;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
