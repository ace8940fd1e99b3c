//! Statutory rates and tables for the supported tax year.
//!
//! Every amount the engine uses lives here. Nothing is configurable at
//! runtime; a different year means a different set of constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{DeductionBracket, RemunerationBand, Schedule, TaxBracket, Yen};

const fn yen(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

// =========================================================================
// Salary income deduction
// =========================================================================

const SALARY_DEDUCTION_BRACKETS: &[DeductionBracket] = &[
    DeductionBracket {
        upper_bound: Some(dec!(1625000)),
        rate: dec!(0.4),
        offset: Decimal::ZERO,
        cap: Some(dec!(550000)),
    },
    DeductionBracket {
        upper_bound: Some(dec!(1800000)),
        rate: dec!(0.3),
        offset: dec!(162500),
        cap: None,
    },
    DeductionBracket {
        upper_bound: Some(dec!(3600000)),
        rate: dec!(0.2),
        offset: dec!(342500),
        cap: None,
    },
    DeductionBracket {
        upper_bound: Some(dec!(6600000)),
        rate: dec!(0.1),
        offset: dec!(702500),
        cap: None,
    },
    DeductionBracket {
        upper_bound: Some(dec!(8500000)),
        rate: dec!(0.05),
        offset: dec!(1032500),
        cap: None,
    },
];

/// Salary income deduction, keyed on gross salary.
pub const SALARY_DEDUCTION_SCHEDULE: Schedule<'static, DeductionBracket> = Schedule::new(
    SALARY_DEDUCTION_BRACKETS,
    DeductionBracket {
        upper_bound: None,
        rate: Decimal::ZERO,
        offset: dec!(1950000),
        cap: None,
    },
);

// =========================================================================
// Itemized deductions
// =========================================================================

/// Basic deduction against the income tax base.
pub const INCOME_TAX_BASIC_DEDUCTION: Decimal = dec!(480000);

/// Basic deduction against the resident tax base.
pub const RESIDENT_TAX_BASIC_DEDUCTION: Decimal = dec!(430000);

pub const MEDICAL_THRESHOLD_RATE: Decimal = dec!(0.05);
pub const MEDICAL_THRESHOLD_CAP: Yen = 100_000;
pub const MEDICAL_DEDUCTION_CAP: Yen = 2_000_000;

const LIFE_INSURANCE_BRACKETS: &[DeductionBracket] = &[
    DeductionBracket {
        upper_bound: Some(dec!(20000)),
        rate: Decimal::ONE,
        offset: Decimal::ZERO,
        cap: None,
    },
    DeductionBracket {
        upper_bound: Some(dec!(40000)),
        rate: dec!(0.5),
        offset: dec!(10000),
        cap: None,
    },
    DeductionBracket {
        upper_bound: Some(dec!(80000)),
        rate: dec!(0.25),
        offset: dec!(20000),
        cap: None,
    },
];

/// Per-category life insurance deduction, keyed on the annual premium.
pub const LIFE_INSURANCE_SCHEDULE: Schedule<'static, DeductionBracket> = Schedule::new(
    LIFE_INSURANCE_BRACKETS,
    DeductionBracket {
        upper_bound: None,
        rate: Decimal::ZERO,
        offset: dec!(40000),
        cap: None,
    },
);

pub const LIFE_INSURANCE_TOTAL_CAP: Yen = 120_000;

/// Earthquake insurance deduction: the premium itself, up to the cap.
pub const EARTHQUAKE_INSURANCE_SCHEDULE: Schedule<'static, DeductionBracket> = Schedule::new(
    &[],
    DeductionBracket {
        upper_bound: None,
        rate: Decimal::ONE,
        offset: Decimal::ZERO,
        cap: Some(dec!(50000)),
    },
);

const LEGACY_LONG_TERM_BRACKETS: &[DeductionBracket] = &[
    DeductionBracket {
        upper_bound: Some(dec!(5000)),
        rate: Decimal::ONE,
        offset: Decimal::ZERO,
        cap: None,
    },
    DeductionBracket {
        upper_bound: Some(dec!(15000)),
        rate: dec!(0.5),
        offset: dec!(2500),
        cap: None,
    },
];

/// Legacy long-term non-life insurance deduction.
pub const LEGACY_LONG_TERM_SCHEDULE: Schedule<'static, DeductionBracket> = Schedule::new(
    LEGACY_LONG_TERM_BRACKETS,
    DeductionBracket {
        upper_bound: None,
        rate: Decimal::ZERO,
        offset: dec!(10000),
        cap: None,
    },
);

/// Ceiling on the combined earthquake and legacy long-term deduction.
pub const EARTHQUAKE_COMBINED_CAP: Yen = 50_000;

pub const SPOUSE_DEDUCTION: Yen = 380_000;
pub const SPOUSE_INCOME_LIMIT: Yen = 480_000;
pub const ELDERLY_DEPENDENT_DEDUCTION: Yen = 480_000;
pub const SPECIFIC_DEPENDENT_DEDUCTION: Yen = 630_000;
pub const GENERAL_DEPENDENT_DEDUCTION: Yen = 380_000;

pub const INCOME_ADJUSTMENT_THRESHOLD: Yen = 8_500_000;
pub const INCOME_ADJUSTMENT_RATE: Decimal = dec!(0.1);

// =========================================================================
// Housing loan credit
// =========================================================================

pub const HOUSING_LOAN_CREDIT_RATE: Decimal = dec!(0.01);
pub const HOUSING_LOAN_CREDIT_CAP: Yen = 400_000;
pub const HOUSING_LOAN_RESIDENT_TAX_CAP: Yen = 136_500;

// =========================================================================
// Income tax
// =========================================================================

const INCOME_TAX_BRACKETS: &[TaxBracket] = &[
    TaxBracket {
        upper_bound: Some(dec!(1950000)),
        rate: dec!(0.05),
        subtraction: Decimal::ZERO,
    },
    TaxBracket {
        upper_bound: Some(dec!(3300000)),
        rate: dec!(0.10),
        subtraction: dec!(97500),
    },
    TaxBracket {
        upper_bound: Some(dec!(6950000)),
        rate: dec!(0.20),
        subtraction: dec!(427500),
    },
    TaxBracket {
        upper_bound: Some(dec!(9000000)),
        rate: dec!(0.23),
        subtraction: dec!(636000),
    },
    TaxBracket {
        upper_bound: Some(dec!(18000000)),
        rate: dec!(0.33),
        subtraction: dec!(1536000),
    },
    TaxBracket {
        upper_bound: Some(dec!(40000000)),
        rate: dec!(0.40),
        subtraction: dec!(2796000),
    },
];

/// Progressive income tax, keyed on the income tax base.
pub const INCOME_TAX_SCHEDULE: Schedule<'static, TaxBracket> = Schedule::new(
    INCOME_TAX_BRACKETS,
    TaxBracket {
        upper_bound: None,
        rate: dec!(0.45),
        subtraction: dec!(4796000),
    },
);

/// Special reconstruction income tax, applied as a multiplier.
pub const RECONSTRUCTION_SURTAX_FACTOR: Decimal = dec!(1.021);

// =========================================================================
// Resident tax
// =========================================================================

/// Prefectural 4% plus municipal 6%.
pub const RESIDENT_TAX_RATE: Decimal = dec!(0.10);
pub const RESIDENT_TAX_PER_CAPITA_LEVY: Decimal = dec!(5000);

// =========================================================================
// Social insurance
// =========================================================================

/// Employee share of health insurance (9.81% split with the employer).
pub const HEALTH_INSURANCE_RATE: Decimal = dec!(0.04905);
/// Employee share of employees' pension insurance (18.3% split).
pub const PENSION_INSURANCE_RATE: Decimal = dec!(0.0915);
/// Employment insurance, general business category. Applies to raw salary.
pub const EMPLOYMENT_INSURANCE_RATE: Decimal = dec!(0.009);

pub const MONTHS_PER_YEAR: Yen = 12;

const fn band(
    lower: u32,
    upper: u32,
    standard: u32,
) -> RemunerationBand {
    RemunerationBand {
        lower_bound: yen(lower),
        upper_bound: Some(yen(upper)),
        standard: yen(standard),
    }
}

const REMUNERATION_BANDS: &[RemunerationBand] = &[
    band(0, 63000, 58000),
    band(63000, 73000, 68000),
    band(73000, 83000, 78000),
    band(83000, 93000, 88000),
    band(93000, 101000, 98000),
    band(101000, 107000, 104000),
    band(107000, 114000, 110000),
    band(114000, 122000, 118000),
    band(122000, 130000, 126000),
    band(130000, 138000, 134000),
    band(138000, 146000, 142000),
    band(146000, 155000, 150000),
    band(155000, 165000, 160000),
    band(165000, 175000, 170000),
    band(175000, 185000, 180000),
    band(185000, 195000, 190000),
    band(195000, 210000, 200000),
    band(210000, 230000, 220000),
    band(230000, 250000, 240000),
    band(250000, 270000, 260000),
    band(270000, 290000, 280000),
    band(290000, 310000, 300000),
    band(310000, 330000, 320000),
    band(330000, 350000, 340000),
    band(350000, 370000, 360000),
    band(370000, 395000, 380000),
    band(395000, 425000, 410000),
    band(425000, 455000, 440000),
    band(455000, 485000, 470000),
    band(485000, 515000, 500000),
    band(515000, 545000, 530000),
    band(545000, 575000, 560000),
    band(575000, 605000, 590000),
    band(605000, 635000, 620000),
    band(635000, 665000, 650000),
    band(665000, 695000, 680000),
    band(695000, 730000, 710000),
    band(730000, 770000, 750000),
    band(770000, 810000, 790000),
    band(810000, 855000, 830000),
    band(855000, 905000, 880000),
    band(905000, 955000, 930000),
    band(955000, 1005000, 980000),
    band(1005000, 1055000, 1030000),
    band(1055000, 1115000, 1090000),
    band(1115000, 1175000, 1150000),
];

/// Standard monthly remuneration grades, keyed on monthly income.
pub const REMUNERATION_SCHEDULE: Schedule<'static, RemunerationBand> = Schedule::new(
    REMUNERATION_BANDS,
    RemunerationBand {
        lower_bound: yen(1175000),
        upper_bound: None,
        standard: yen(1210000),
    },
);

// =========================================================================
// Donation limit estimate
// =========================================================================

pub const DONATION_INCOME_TAX_FACTOR: Decimal = dec!(0.004);
pub const DONATION_RESIDENT_TAX_FACTOR: Decimal = dec!(0.006);
pub const DONATION_MULTIPLIER: Decimal = dec!(2);
