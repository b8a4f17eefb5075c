//! Option lists offered by the choice fields of each form.
//!
//! Entries are `(value, label)`; the value is what gets submitted. Event types
//! and contact subjects submit a lowercase, hyphenated form of the label.

pub const EVENT_TYPES: &[(&str, &str)] = &[
    ("wedding-ceremony", "Wedding Ceremony"),
    ("wedding-reception", "Wedding Reception"),
    ("birthday-party", "Birthday Party"),
    ("corporate-conference", "Corporate Conference"),
    ("product-launch", "Product Launch"),
    ("festival-celebration", "Festival Celebration"),
    ("anniversary-party", "Anniversary Party"),
    ("baby-shower", "Baby Shower"),
    ("engagement-ceremony", "Engagement Ceremony"),
    ("farewell-party", "Farewell Party"),
    ("exhibition", "Exhibition"),
    ("other", "Other"),
];

pub const GUEST_COUNTS: &[(&str, &str)] = &[
    ("1-50", "1-50"),
    ("51-100", "51-100"),
    ("101-250", "101-250"),
    ("251-500", "251-500"),
    ("501-1000", "501-1000"),
    ("1000+", "1000+"),
];

pub const BUDGET_RANGES: &[(&str, &str)] = &[
    ("Under ₹50,000", "Under ₹50,000"),
    ("₹50,000 - ₹1,00,000", "₹50,000 - ₹1,00,000"),
    ("₹1,00,000 - ₹2,50,000", "₹1,00,000 - ₹2,50,000"),
    ("₹2,50,000 - ₹5,00,000", "₹2,50,000 - ₹5,00,000"),
    ("₹5,00,000 - ₹10,00,000", "₹5,00,000 - ₹10,00,000"),
    ("Above ₹10,00,000", "Above ₹10,00,000"),
];

pub const POSITIONS: &[(&str, &str)] = &[
    ("volunteer", "Event Volunteer"),
    ("coordinator", "Event Coordinator"),
    ("anchor", "Anchor / Emcee"),
    ("logistics", "Logistics Staff"),
    ("porter", "Porter / Setup Crew"),
    ("production", "Production Assistant"),
    ("event_manager", "Event Manager"),
    ("event_organiser", "Event Organiser"),
];

pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("fresher", "Fresher (0-6 months)"),
    ("junior", "Junior (6 months - 2 years)"),
    ("mid", "Mid Level (2-5 years)"),
    ("senior", "Senior (5+ years)"),
];

pub const CONTACT_SUBJECTS: &[(&str, &str)] = &[
    ("event-booking-inquiry", "Event Booking Inquiry"),
    ("career-opportunity", "Career Opportunity"),
    ("staffing-requirements", "Staffing Requirements"),
    ("partnership-proposal", "Partnership Proposal"),
    ("feedback", "Feedback"),
    ("other", "Other"),
];

pub const STAFF_TYPES: &[(&str, &str)] = &[
    ("volunteers", "Event Volunteers"),
    ("anchors", "Anchors / Emcees"),
    ("logistics", "Logistics Staff"),
    ("porters", "Porters / Setup Crew"),
    ("production", "Production Team"),
];

/// Count field shown for each staff type once it is selected.
pub const STAFF_COUNT_FIELDS: &[(&str, &str, &str)] = &[
    ("volunteers", "volunteerCount", "Volunteers Count"),
    ("anchors", "anchorCount", "Anchors Count"),
    ("logistics", "logisticsCount", "Logistics Staff Count"),
    ("porters", "porterCount", "Porters Count"),
    ("production", "productionCount", "Production Staff Count"),
];
