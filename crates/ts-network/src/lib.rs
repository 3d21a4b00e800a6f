//! `ts-network` — street network, vehicle paths, and input loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`street`]  | `Street`, `VehiclePath`                                     |
//! | [`network`] | `StreetNetwork` (incoming-street CSR), `StreetNetworkBuilder` |
//! | [`loader`]  | `Problem`, `load_problem`, `load_problem_reader`            |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod loader;
pub mod network;
pub mod street;


pub use error::{NetworkError, NetworkResult};
pub use loader::{Problem, load_problem, load_problem_reader};
pub use network::{StreetNetwork, StreetNetworkBuilder};
pub use street::{Street, VehiclePath};
