//! Constants used throughout the NLQ core crate.
//!
//! This module contains the builtin lookup tables to ensure consistency
//! across the codebase and make maintenance easier.

/// Builtin condition synonym inventory, as `(surface form, canonical name)`
/// pairs.
///
/// Every canonical name also appears as its own surface form. Surface forms
/// are matched at word boundaries only, so short abbreviations like `dm`
/// cannot fire inside longer words.
pub const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    // diabetes
    ("diabetes", "diabetes"),
    ("diabetic", "diabetes"),
    ("diabetics", "diabetes"),
    ("type 1 diabetes", "diabetes"),
    ("type 2 diabetes", "diabetes"),
    ("dm", "diabetes"),
    ("t1dm", "diabetes"),
    ("t2dm", "diabetes"),
    // cancer
    ("cancer", "cancer"),
    ("cancerous", "cancer"),
    ("tumor", "cancer"),
    ("tumour", "cancer"),
    ("malignancy", "cancer"),
    ("oncology", "cancer"),
    ("carcinoma", "cancer"),
    ("lymphoma", "cancer"),
    ("leukemia", "cancer"),
    // asthma
    ("asthma", "asthma"),
    ("asthmatic", "asthma"),
    ("respiratory", "asthma"),
    ("breathing problems", "asthma"),
    ("wheeze", "asthma"),
    ("wheezing", "asthma"),
    // heart disease
    ("heart disease", "heart disease"),
    ("cardiac", "heart disease"),
    ("cardiovascular", "heart disease"),
    ("cardiovascular disease", "heart disease"),
    ("heart condition", "heart disease"),
    ("coronary", "heart disease"),
    ("myocardial", "heart disease"),
    ("cardiology", "heart disease"),
    ("heart attack", "heart disease"),
    ("stroke", "heart disease"),
    // hypertension
    ("hypertension", "hypertension"),
    ("high blood pressure", "hypertension"),
    ("elevated bp", "hypertension"),
    ("hbp", "hypertension"),
    // depression
    ("depression", "depression"),
    ("depressed", "depression"),
    ("mental health", "depression"),
    ("psychiatric", "depression"),
    ("mood disorder", "depression"),
    // covid
    ("covid", "covid"),
    ("coronavirus", "covid"),
    ("covid-19", "covid"),
    ("sars-cov-2", "covid"),
    ("pandemic", "covid"),
];
