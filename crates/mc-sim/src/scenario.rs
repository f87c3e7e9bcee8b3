//! JSON scenario files.
//!
//! ```json
//! {
//!   "config": { "num_messages": 2, "retransmit_wait": 50, "seed": 7 },
//!   "machines": [
//!     { "position": {"x": 0, "y": 0, "z": 0}, "radius": 2.0,
//!       "transmitter": { "release": {"x": 0, "y": 0, "z": 0},
//!                        "molecules": [{"count": 20, "radius": 0.5}] } },
//!     { "position": {"x": 15, "y": 0, "z": 0}, "radius": 2.0,
//!       "receiver": { "release": {"x": 15, "y": 0, "z": 0},
//!                     "molecules": [{"count": 20, "radius": 0.5}] } }
//!   ],
//!   "microtubules": []
//! }
//! ```
//!
//! Omitted `config` fields take their [`RunConfig::default`] values.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use mc_core::RunConfig;
use mc_medium::{MediumBuilder, Microtubule};
use serde::{Deserialize, Serialize};

use crate::{MachineSpec, Sim, SimBuilder, SimResult};

/// A complete run description: configuration plus layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: RunConfig,

    pub machines: Vec<MachineSpec>,

    #[serde(default)]
    pub microtubules: Vec<Microtubule>,
}

impl Scenario {
    pub fn from_reader<R: Read>(reader: R) -> SimResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate everything and build a ready-to-run [`Sim`].
    pub fn into_sim(self) -> SimResult<Sim> {
        let mut tracks = MediumBuilder::new();
        for mt in self.microtubules {
            tracks.add(mt);
        }

        let mut builder = SimBuilder::new(self.config).medium(tracks.build()?);
        for spec in self.machines {
            builder.add_machine(spec);
        }
        builder.build()
    }
}
