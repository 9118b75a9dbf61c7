mod ids;
mod question;
mod role;

pub use ids::{ChoiceId, QuestionId};

pub use question::{Choice, Question};
pub use role::{RoleError, RoleName};
