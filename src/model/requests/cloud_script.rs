/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::SharedContext;
use crate::model::entity::EntityKey;
use crate::model::requests::CustomTags;
use crate::{impl_custom_tags, impl_request};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which CloudScript revision to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudScriptRevisionOption {
    /// Revision marked live
    Live,
    /// Most recently uploaded revision
    Latest,
    /// Revision given by `specific_revision`
    Specific,
}

/// Runs a CloudScript handler as an entity
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteEntityCloudScriptRequest {
    /// Handler name
    pub function_name: String,
    /// Entity to run as, the caller when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityKey>,
    /// Argument passed to the handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_parameter: Option<Value>,
    /// Emit a PlayStream event for the execution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_play_stream_event: Option<bool>,
    /// Revision selection, `Live` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_selection: Option<CloudScriptRevisionOption>,
    /// Revision to run when `revision_selection` is `Specific`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_revision: Option<i32>,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl ExecuteEntityCloudScriptRequest {
    /// Creates the request
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            ..Default::default()
        }
    }

    /// Runs as another entity
    #[must_use]
    pub fn with_entity(mut self, entity: EntityKey) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Sets the handler argument
    #[must_use]
    pub fn with_function_parameter(mut self, parameter: Value) -> Self {
        self.function_parameter = Some(parameter);
        self
    }

    /// Sets whether a PlayStream event is emitted
    #[must_use]
    pub fn with_generate_play_stream_event(mut self, generate: bool) -> Self {
        self.generate_play_stream_event = Some(generate);
        self
    }

    /// Sets the revision selection
    #[must_use]
    pub fn with_revision_selection(mut self, selection: CloudScriptRevisionOption) -> Self {
        self.revision_selection = Some(selection);
        self
    }

    /// Sets the revision used with `CloudScriptRevisionOption::Specific`
    #[must_use]
    pub fn with_specific_revision(mut self, revision: i32) -> Self {
        self.specific_revision = Some(revision);
        self
    }
}

/// Runs an Azure Function registered with the title
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteFunctionRequest {
    /// Function name
    pub function_name: String,
    /// Entity to run as, the caller when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityKey>,
    /// Argument passed to the function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_parameter: Option<Value>,
    /// Emit a PlayStream event for the execution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_play_stream_event: Option<bool>,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl ExecuteFunctionRequest {
    /// Creates the request
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            ..Default::default()
        }
    }

    /// Runs as another entity
    #[must_use]
    pub fn with_entity(mut self, entity: EntityKey) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Sets the function argument
    #[must_use]
    pub fn with_function_parameter(mut self, parameter: Value) -> Self {
        self.function_parameter = Some(parameter);
        self
    }

    /// Sets whether a PlayStream event is emitted
    #[must_use]
    pub fn with_generate_play_stream_event(mut self, generate: bool) -> Self {
        self.generate_play_stream_event = Some(generate);
        self
    }
}

/// Lists registered functions
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFunctionsRequest {
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl ListFunctionsRequest {
    /// Creates the request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Registers an HTTP triggered function
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterHttpFunctionRequest {
    /// Function name
    pub function_name: String,
    /// URL the function is reachable at
    pub function_url: String,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl RegisterHttpFunctionRequest {
    /// Creates the request
    pub fn new(function_name: impl Into<String>, function_url: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            function_url: function_url.into(),
            ..Default::default()
        }
    }
}

/// Unregisters a function
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnregisterFunctionRequest {
    /// Function name
    pub function_name: String,
    /// Custom tags for PlayStream events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<CustomTags>,
    /// Per-call authentication context override
    #[serde(skip)]
    pub authentication_context: Option<SharedContext>,
}

impl UnregisterFunctionRequest {
    /// Creates the request
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            ..Default::default()
        }
    }
}

impl_request!(
    ExecuteEntityCloudScriptRequest,
    ExecuteFunctionRequest,
    ListFunctionsRequest,
    RegisterHttpFunctionRequest,
    UnregisterFunctionRequest,
);

impl_custom_tags!(
    ExecuteEntityCloudScriptRequest,
    ExecuteFunctionRequest,
    ListFunctionsRequest,
    RegisterHttpFunctionRequest,
    UnregisterFunctionRequest,
);
