//! Seed data store.
//!
//! Every collection ships inside the binary (`data/*.json`). A data directory
//! may override any of them file-by-file: `<dir>/offers.json` replaces the
//! embedded offers, and so on. Nothing is ever written back except through
//! an explicit [`DataStore::export`].

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::error::DataError;
use crate::models::{
    Activity, Buyer, DealPreparation, DealRoom, InterestRequest, Meeting, MessageThread, Offer,
    OfferDetail, Practice, Recommendation,
};

/// A collection's file stem and its compiled-in contents
struct SeedFile {
    name: &'static str,
    embedded: &'static str,
}

const OFFERS: SeedFile = SeedFile {
    name: "offers",
    embedded: include_str!("../data/offers.json"),
};
const OFFER_DETAILS: SeedFile = SeedFile {
    name: "offer_details",
    embedded: include_str!("../data/offer_details.json"),
};
const BUYERS: SeedFile = SeedFile {
    name: "buyers",
    embedded: include_str!("../data/buyers.json"),
};
const THREADS: SeedFile = SeedFile {
    name: "threads",
    embedded: include_str!("../data/threads.json"),
};
const DEAL_ROOM: SeedFile = SeedFile {
    name: "deal_room",
    embedded: include_str!("../data/deal_room.json"),
};
const MEETINGS: SeedFile = SeedFile {
    name: "meetings",
    embedded: include_str!("../data/meetings.json"),
};
const ACTIVITIES: SeedFile = SeedFile {
    name: "activities",
    embedded: include_str!("../data/activities.json"),
};
const INTERESTS: SeedFile = SeedFile {
    name: "interests",
    embedded: include_str!("../data/interests.json"),
};
const RECOMMENDATIONS: SeedFile = SeedFile {
    name: "recommendations",
    embedded: include_str!("../data/recommendations.json"),
};
const PRACTICE: SeedFile = SeedFile {
    name: "practice",
    embedded: include_str!("../data/practice.json"),
};
const DEAL_PREPARATION: SeedFile = SeedFile {
    name: "deal_preparation",
    embedded: include_str!("../data/deal_preparation.json"),
};

#[derive(Debug, Clone)]
pub struct DataStore {
    pub offers: Vec<Offer>,
    pub offer_details: Vec<OfferDetail>,
    pub buyers: Vec<Buyer>,
    pub threads: Vec<MessageThread>,
    pub deal_room: DealRoom,
    pub meetings: Vec<Meeting>,
    pub activities: Vec<Activity>,
    pub interests: Vec<InterestRequest>,
    pub recommendations: Vec<Recommendation>,
    pub practice: Practice,
    pub deal_preparation: DealPreparation,
}

impl DataStore {
    /// Load every collection, preferring files in `data_dir` when given.
    pub fn load(data_dir: Option<&Path>) -> Result<Self, DataError> {
        if let Some(dir) = data_dir {
            if !dir.is_dir() {
                return Err(DataError::MissingDirectory(dir.to_path_buf()));
            }
            info!(?dir, "Loading seed data with directory overrides");
        }

        let store = Self {
            offers: load_seed(data_dir, &OFFERS)?,
            offer_details: load_seed(data_dir, &OFFER_DETAILS)?,
            buyers: load_seed(data_dir, &BUYERS)?,
            threads: load_seed(data_dir, &THREADS)?,
            deal_room: load_seed(data_dir, &DEAL_ROOM)?,
            meetings: load_seed(data_dir, &MEETINGS)?,
            activities: load_seed(data_dir, &ACTIVITIES)?,
            interests: load_seed(data_dir, &INTERESTS)?,
            recommendations: load_seed(data_dir, &RECOMMENDATIONS)?,
            practice: load_seed(data_dir, &PRACTICE)?,
            deal_preparation: load_seed(data_dir, &DEAL_PREPARATION)?,
        };

        debug!(
            offers = store.offers.len(),
            buyers = store.buyers.len(),
            threads = store.threads.len(),
            meetings = store.meetings.len(),
            "Seed data loaded"
        );
        Ok(store)
    }

    /// The compiled-in data set
    pub fn embedded() -> Result<Self, DataError> {
        Self::load(None)
    }

    /// Write every collection to `dir` as pretty JSON, creating it if needed.
    pub fn export(&self, dir: &Path) -> Result<(), DataError> {
        std::fs::create_dir_all(dir).map_err(|e| DataError::io(dir, e))?;
        save_seed(dir, OFFERS.name, &self.offers)?;
        save_seed(dir, OFFER_DETAILS.name, &self.offer_details)?;
        save_seed(dir, BUYERS.name, &self.buyers)?;
        save_seed(dir, THREADS.name, &self.threads)?;
        save_seed(dir, DEAL_ROOM.name, &self.deal_room)?;
        save_seed(dir, MEETINGS.name, &self.meetings)?;
        save_seed(dir, ACTIVITIES.name, &self.activities)?;
        save_seed(dir, INTERESTS.name, &self.interests)?;
        save_seed(dir, RECOMMENDATIONS.name, &self.recommendations)?;
        save_seed(dir, PRACTICE.name, &self.practice)?;
        save_seed(dir, DEAL_PREPARATION.name, &self.deal_preparation)?;
        info!(?dir, "Seed data exported");
        Ok(())
    }

    // ===== Lookups =====

    pub fn offer(&self, id: &str) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == id)
    }

    pub fn offer_detail(&self, offer_id: &str) -> Option<&OfferDetail> {
        self.offer_details.iter().find(|d| d.offer_id == offer_id)
    }

    pub fn buyer(&self, id: &str) -> Option<&Buyer> {
        self.buyers.iter().find(|b| b.id == id)
    }

    pub fn thread(&self, id: &str) -> Option<&MessageThread> {
        self.threads.iter().find(|t| t.id == id)
    }

    /// Offers submitted by a given buyer
    pub fn offers_from(&self, buyer_id: &str) -> Vec<&Offer> {
        self.offers.iter().filter(|o| o.buyer_id == buyer_id).collect()
    }
}

fn load_seed<T: DeserializeOwned>(data_dir: Option<&Path>, seed: &SeedFile) -> Result<T, DataError> {
    let override_path = data_dir
        .map(|dir| dir.join(format!("{}.json", seed.name)))
        .filter(|path| path.exists());

    match override_path {
        Some(path) => {
            debug!(?path, "Reading seed override");
            let contents = std::fs::read_to_string(&path).map_err(|e| DataError::io(&path, e))?;
            serde_json::from_str(&contents).map_err(|source| DataError::Parse {
                name: seed.name,
                source,
            })
        }
        None => serde_json::from_str(seed.embedded).map_err(|source| DataError::Parse {
            name: seed.name,
            source,
        }),
    }
}

fn save_seed<T: Serialize + ?Sized>(dir: &Path, name: &'static str, data: &T) -> Result<(), DataError> {
    let path = dir.join(format!("{}.json", name));
    let contents =
        serde_json::to_string_pretty(data).map_err(|source| DataError::Parse { name, source })?;
    std::fs::write(&path, contents).map_err(|e| DataError::io(&path, e))
}
