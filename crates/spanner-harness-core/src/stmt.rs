mod key_set;
pub use key_set::KeySet;

mod mutation;
pub use mutation::{Mutation, Write};

mod row;
pub use row::{Row, Rows};

mod statement;
pub use statement::Statement;

mod value;
pub use value::Value;
