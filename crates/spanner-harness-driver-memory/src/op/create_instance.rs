use crate::state::{Instance, State};

use spanner_harness_core::{
    driver::{operation::CreateInstance, Response},
    Error, Result,
};

impl State {
    pub(crate) fn exec_create_instance(&mut self, op: CreateInstance) -> Result<Response> {
        let name = op.instance.to_string();

        if self.instances.contains_key(&name) {
            return Err(Error::already_exists(format!("instance {name}")));
        }

        self.instances.insert(name.clone(), Instance::default());
        let operation = self.complete_operation(&name, None);

        Ok(Response::pending(operation, true))
    }
}
