//! kubealias - Shell alias generation for kubectl
//!
//! "Stop typing kubectl, start typing k."
//!
//! kubealias composes a fixed grammar of command fragments (base command,
//! operation, resource, flags) into every valid combination and prints one
//! alias per line in the chosen shell's syntax:
//! - `k` for `kubectl`, `kg` for `kubectl get`, `kgpo` for `kubectl get pods`
//! - flag forms like `kgpooyaml` for `kubectl get pods -o=yaml`
//! - bash and zsh get `alias` lines, fish gets `abbr` definitions
//!
//! Compatibility rules on each fragment (what it requires, what it refuses
//! to sit next to) keep nonsense like `kubectl delete --all-namespaces`
//! out of the output.

pub mod enumerate;
pub mod fragment;
pub mod grammar;
pub mod render;

pub use fragment::{Fragment, PartGroup};
pub use render::{Alias, Shell, UnsupportedShell};
