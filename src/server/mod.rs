//! Server-side web application and business logic.
//!
//! This module contains the complete backend for the bot list: HTTP handlers, page
//! rendering, business logic, data access and the Discord integrations. It uses Axum as
//! the web framework, SeaORM for database operations, minijinja for pages and Serenity
//! for talking to Discord.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control and page data
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, outcomes and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//! - **View** (`view/`) - Embedded templates and page rendering
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Localization** (`i18n`) - Message catalogs and the `Locale` extractor
//! - **State** (`state`) - Shared application state (DB, HTTP clients, etc.)
//! - **Startup** (`startup`) - Initialization of database, sessions and Discord clients
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** checks login, form token and access, then validates input
//! 3. **Service** executes business logic and queues notifications
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** renders the page or redirects

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod view;
