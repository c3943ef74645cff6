use super::*;
use crate::InstancePath;

#[derive(Debug, Clone)]
pub struct CreateInstance {
    /// Instance to create
    pub instance: InstancePath,

    /// Instance configuration id (`emulator-config` on the emulator)
    pub config: String,

    pub display_name: String,

    pub node_count: u32,
}

impl CreateInstance {
    /// Request for the emulator's only instance configuration.
    pub fn emulator(instance: InstancePath) -> CreateInstance {
        CreateInstance {
            display_name: instance.instance_id().to_string(),
            instance,
            config: "emulator-config".to_string(),
            node_count: 1,
        }
    }

    /// `projects/{project}/instanceConfigs/{config}`
    pub fn config_path(&self) -> String {
        format!("{}/instanceConfigs/{}", self.instance.project_path(), self.config)
    }
}

impl From<CreateInstance> for Operation {
    fn from(value: CreateInstance) -> Self {
        Self::CreateInstance(value)
    }
}
