use crate::{op, wire, Connection};

use spanner_harness_core::{
    driver::{operation::CreateInstance, Response},
    Result,
};

impl Connection {
    pub(crate) async fn exec_create_instance(&mut self, op: CreateInstance) -> Result<Response> {
        let request = wire::CreateInstanceRequest {
            instance_id: op.instance.instance_id(),
            instance: wire::Instance {
                config: op.config_path(),
                display_name: &op.display_name,
                node_count: op.node_count,
            },
        };

        let operation: wire::Operation = self
            .post(&format!("{}/instances", op.instance.project_path()), &request)
            .await?;

        op::pending(operation)
    }
}
