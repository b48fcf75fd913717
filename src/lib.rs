//! # User Service
//!
//! User CRUD operations that log every call and notify an in-process message
//! queue.
//!
//! - **Domain types** → [`domain::UserEntity`], [`domain::GenericResponse`]
//! - **Message sender** → [`message::MessageSender`], backed by the
//!   [`message::MessageQueueActor`] and its [`message::MessageQueueClient`]
//! - **Service** → [`service::UserService`], implemented by [`service::UserServiceImpl`]
//! - **System** → [`app_system::UserSystem`] for startup and shutdown,
//!   [`app_system::setup_tracing`] for logging
//!
//! Only `add` writes to the queue; `remove` and `update` just log, and
//! `query_user_info_by_id` drains and prints the queue without looking up the
//! user.

pub mod app_system;
pub mod domain;
pub mod message;
pub mod service;

#[cfg(test)]
mod mock_framework;
