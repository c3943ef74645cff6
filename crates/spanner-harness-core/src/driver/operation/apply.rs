use super::*;
use crate::{stmt::Mutation, DatabasePath};

#[derive(Debug, Clone)]
pub struct Apply {
    /// Database to write to
    pub database: DatabasePath,

    /// Mutations committed together in a single read-write transaction
    pub mutations: Vec<Mutation>,
}

impl From<Apply> for Operation {
    fn from(value: Apply) -> Self {
        Self::Apply(value)
    }
}
