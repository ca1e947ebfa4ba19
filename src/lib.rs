//! # trucks
//!
//! A small Rust library describing delivery trucks.
//! Built for code that needs truck records with a fluent builder,
//! random fleet generation and a plain singly linked node type.
//!
//! ## Features
//!
//! - **Immutable trucks**: Fields are fixed once a [`Truck`](trucks::truck::Truck) is built
//! - **Fluent builder**: Chained setters, unset fields default to zero values
//! - **Random trucks**: Uniform sampling in the documented ranges, with an injectable RNG
//! - **Optional validation**: Range checks are opt-in, building never fails
//! - **Serialization**: Optional serde support
//!
//! ## Quick Start
//!
//! ```rust
//! use trucks::trucks::truck::Truck;
//!
//! let truck = Truck::builder()
//!     .license_plate("ABC 123")
//!     .carrying_capacity(45000)
//!     .horse_power(400)
//!     .transmission("Manual")
//!     .wheel_base(250)
//!     .wheel_cut(45)
//!     .build();
//!
//! assert_eq!(
//!     truck.to_string(),
//!     "Truck ABC 123, capacity = 45000, horsePower = 400, transmission = Manual, wheelBase = 250, wheelCut = 45"
//! );
//! truck.print();
//! ```
//!
//! ## Linking Trucks
//!
//! ```rust
//! use trucks::trucks::{node::TruckListNode, truck::Truck};
//!
//! let mut head = TruckListNode::new(Truck::random());
//! head.set_next(Some(TruckListNode::new(Truck::random())));
//!
//! let mut visited = 0;
//! let mut cursor = Some(&head);
//! while let Some(node) = cursor {
//!     visited += 1;
//!     cursor = node.next();
//! }
//! assert_eq!(visited, 2);
//! ```
//!
//! ## Validation
//!
//! [`build`](trucks::builder::TruckBuilder::build) accepts any value.
//! Use [`Truck::validate`](trucks::truck::Truck::validate) or
//! [`try_build`](trucks::builder::TruckBuilder::try_build) to check:
//! - Licence plate is not blank
//! - Integer fields fall inside their `[MIN, MAX)` ranges
//! - Transmission is one of the known values
//!
//! ## Optional Features
//!
//! - `serde`: Enable serialization support for trucks and builders
//! - `tracing`: Enable structured logging integration

pub mod trucks;
