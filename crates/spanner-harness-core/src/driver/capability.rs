#[derive(Debug)]
pub struct Capability {
    /// When true, the backend executes SQL queries (`Operation::ExecuteSql`).
    pub sql: bool,
}

impl Capability {
    /// Cloud Spanner emulator capabilities.
    pub const EMULATOR: Self = Self { sql: true };

    /// In-process driver capabilities. Only key based reads are served.
    pub const MEMORY: Self = Self { sql: false };
}
