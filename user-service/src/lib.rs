// User Service Library
// Repository client, list controller and configuration for userdeck

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod models;
pub mod stub;

pub use client::{HttpUserRepository, UserRepository};
pub use config::AppConfig;
pub use controller::{
    ConfirmChoice, DeleteConfirmation, FormMode, FormState, Notice, NoticeKind, Submission,
    UserField, UserListController, PAGE_SIZE,
};
pub use error::{ServiceError, ServiceResult};
pub use models::{NewUser, User};
pub use stub::{RecordedCall, StubUserRepository};
