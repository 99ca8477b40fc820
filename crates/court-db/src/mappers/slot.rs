//! Slot model <-> entity mapper

use court_core::entities::{Location, Slot, SlotView};

use crate::models::{LocationModel, SlotWithCourtModel};

impl From<SlotWithCourtModel> for SlotView {
    fn from(model: SlotWithCourtModel) -> Self {
        SlotView {
            slot: Slot {
                slot_id: model.slot_id,
                court_id: model.court_id,
                date: model.date,
                start_time: model.start_time,
                end_time: model.end_time,
                available: model.available,
            },
            location: model.location,
            image: model.image,
        }
    }
}

impl From<LocationModel> for Location {
    fn from(model: LocationModel) -> Self {
        Location {
            location: model.location,
            image: model.image,
        }
    }
}
