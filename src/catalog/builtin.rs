//! Published zone and price tables.

use super::{Catalog, PricingRules};
use crate::models::base::Base;
use crate::models::service::ServicePriceEntry;
use crate::models::zone::{Zone, ZoneId};

pub(super) fn catalog() -> Catalog {
    Catalog {
        version: "2025-06".to_string(),
        bases: vec![
            Base::new("Tonbridge", "TN9 1PP"),
            Base::new("Eltham", "SE9 4HA"),
        ],
        zones: vec![
            Zone::bounded(ZoneId::A, 25, "0–25 mins", "Core area"),
            Zone::bounded(ZoneId::B, 45, "25–45 mins", "Standard coverage"),
            Zone::bounded(ZoneId::C, 60, "45–60 mins", "Edge of radius"),
            Zone::catch_all(ZoneId::OutOfArea, "60+ mins", "Quote only"),
        ],
        services: services(),
        rules: PricingRules::default(),
    }
}

fn services() -> Vec<ServicePriceEntry> {
    const STANDARD: [u32; 3] = [120, 135, 150];
    const PRIORITY: [u32; 3] = [160, 175, 190];
    const EMISSIONS: [u32; 3] = [170, 185, 200];

    vec![
        ServicePriceEntry::new(
            "diagnostic-callout",
            "Diagnostic Callout (Standard)",
            STANDARD,
            60,
            20,
            24,
        ),
        ServicePriceEntry::new(
            "vor-priority-triage",
            "VOR / Priority Triage (Commercial)",
            PRIORITY,
            75,
            30,
            0,
        ),
        ServicePriceEntry::new("vor-van-diagnostics", "VOR Van Diagnostics", PRIORITY, 75, 30, 0),
        ServicePriceEntry::new(
            "emissions-fault-decision",
            "Emissions Fault Decision Visit (AdBlue/SCR/DPF/NOx)",
            EMISSIONS,
            90,
            35,
            24,
        ),
        ServicePriceEntry::new("adblue-countdown", "AdBlue Countdown Fix", EMISSIONS, 90, 35, 24),
        ServicePriceEntry::new(
            "dpf-regeneration-decision",
            "DPF Warning Light Diagnostic",
            EMISSIONS,
            90,
            35,
            24,
        ),
        ServicePriceEntry::new(
            "nox-scr-diagnostics",
            "NOx Sensor & SCR Diagnostics",
            EMISSIONS,
            90,
            35,
            24,
        ),
        ServicePriceEntry::new(
            "sprinter-limp-mode",
            "Sprinter Limp Mode Diagnostic",
            STANDARD,
            60,
            20,
            24,
        ),
        ServicePriceEntry::new(
            "intermittent-electrical-faults",
            "Intermittent Electrical Diagnostic",
            STANDARD,
            60,
            20,
            24,
        ),
        ServicePriceEntry::new(
            "mercedes-xentry-diagnostics",
            "Mercedes Xentry Diagnostics & Coding",
            STANDARD,
            60,
            20,
            24,
        ),
        ServicePriceEntry::new(
            "pre-purchase-health-check",
            "Pre-Purchase Digital Health Check",
            PRIORITY,
            75,
            30,
            24,
        ),
        ServicePriceEntry::new(
            "fleet-health-check",
            "Fleet Diagnostic Health Check",
            STANDARD,
            60,
            20,
            24,
        ),
    ]
}
