/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request models
//!
//! Optional fields are `Option<T>` and are left out of the wire body while
//! unset, so "not provided" and "provided as zero/empty" stay distinguishable.
//! A `with_*` builder sets exactly one field.

use crate::application::auth::SharedContext;
use serde::Serialize;

/// Admin API requests
mod admin;
/// Authentication API requests
mod authentication;
/// Client API requests
mod client;
/// CloudScript API requests
mod cloud_script;
/// Localization API requests
mod localization;
/// Title data requests shared by the Admin and Client APIs
mod title_data;

pub use admin::*;
pub use authentication::*;
pub use client::*;
pub use cloud_script::*;
pub use localization::*;
pub use title_data::*;

/// Custom tags attached to a request for PlayStream event tagging
pub type CustomTags = std::collections::HashMap<String, String>;

/// Common behaviour of every request body
pub trait PlayFabRequest: Serialize + Send + Sync {
    /// Per-call authentication context override
    fn authentication_context(&self) -> Option<&SharedContext>;
}

/// Implements [`PlayFabRequest`] and the context override builder for request types
///
/// Each type must have an `authentication_context: Option<SharedContext>` field
/// marked `#[serde(skip)]`.
#[macro_export]
macro_rules! impl_request {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::model::requests::PlayFabRequest for $name {
                fn authentication_context(
                    &self,
                ) -> Option<&$crate::application::auth::SharedContext> {
                    self.authentication_context.as_ref()
                }
            }

            impl $name {
                /// Authenticates this call with `context` instead of the client's default
                #[must_use]
                pub fn with_authentication_context(
                    mut self,
                    context: $crate::application::auth::SharedContext,
                ) -> Self {
                    self.authentication_context = Some(context);
                    self
                }
            }
        )+
    };
}

/// Implements a `with_custom_tags` builder for request types with a `custom_tags` field
#[macro_export]
macro_rules! impl_custom_tags {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                /// Sets the custom tags
                #[must_use]
                pub fn with_custom_tags(mut self, tags: $crate::model::requests::CustomTags) -> Self {
                    self.custom_tags = Some(tags);
                    self
                }
            }
        )+
    };
}
