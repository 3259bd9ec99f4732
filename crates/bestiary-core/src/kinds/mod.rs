//! The shipped entity-kind variants.
//!
//! Kinds are a closed set of tagged variants; shared traits of a family
//! (the common flags every creature carries, the rideable-mount fields)
//! live in composable profiles rather than an inheritance chain. Each
//! variant configures its own fields, then delegates to the profiles it
//! composes, both at configuration time and in `apply`.
//!
//! Per-field validation is a property of the field, not a universal rule:
//! numeric ranges clamp (llama strength to `[1, 5]`, jump strength to
//! `[0, 2]`, health to `[1, 1024]`), unrecognized enumerated names are
//! silently ignored so the engine default survives, and unset optional
//! fields are simply never applied.

pub mod common;
pub mod donkey;
pub mod generic;
pub mod llama;
pub mod mount;
pub mod shulker;
pub mod wither;

pub use common::CommonProfile;
pub use donkey::DonkeyKind;
pub use generic::GenericKind;
pub use llama::LlamaKind;
pub use mount::MountProfile;
pub use shulker::ShulkerKind;
pub use wither::WitherKind;
