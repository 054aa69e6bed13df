// SPDX-FileCopyrightText: 2026 Rei Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions consumed by the pipeline orchestrator.
//!
//! Every collaborator is synchronous and must be reentrant: the orchestrator
//! shares one instance of each across concurrent calls without locking.

pub mod capability;
pub mod crypto;
pub mod descriptor;
pub mod format;
pub mod transform;

// Re-export all traits at the traits module level for convenience.
pub use capability::CapabilityProvider;
pub use crypto::{Cipher, KeyDeriver};
pub use descriptor::DescriptorGenerator;
pub use format::TokenFormatter;
pub use transform::{ContentTransform, SizeNormalizer};
