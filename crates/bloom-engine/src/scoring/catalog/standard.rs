//! Shipped sub-criteria definitions, in definitional order per category.

use crate::scoring::domain::{Benchmark, Category, MeasurementType, SubCriterionDefinition};

pub(super) fn definitions(category: Category) -> &'static [SubCriterionDefinition] {
    match category {
        Category::Cashflow => CASHFLOW,
        Category::Appreciation => APPRECIATION,
        Category::Financing => FINANCING,
        Category::Location => LOCATION,
        Category::Condition => CONDITION,
        Category::Tenancy => TENANCY,
        Category::Liquidity => LIQUIDITY,
        Category::Compliance => COMPLIANCE,
    }
}

const CASHFLOW: &[SubCriterionDefinition] = &[
    SubCriterionDefinition {
        id: "noi-yield",
        label: "NOI Yield (Unlevered)",
        weight: 0.30,
        description: "Net Operating Income divided by Property Value or Cost",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "NOI ÷ Property Value or Cost",
        benchmark: Benchmark::new(4.0, 6.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "cash-on-cash",
        label: "Cash-on-Cash Return (Levered)",
        weight: 0.25,
        description: "Annual cashflow after debt service divided by total equity invested",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Annual Cashflow after Debt ÷ Total Equity",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "occupancy-rate",
        label: "Occupancy Rate",
        weight: 0.15,
        description: "Trailing 12-month physical and economic occupancy",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Economic occupancy (collected rent ÷ potential rent)",
        benchmark: Benchmark::new(80.0, 90.0, 95.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "expense-ratio",
        label: "Operating Expense Ratio",
        weight: 0.10,
        description: "Operating expenses as percentage of effective gross income (lower is better)",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "OpEx ÷ Effective Gross Income",
        benchmark: Benchmark::new(55.0, 45.0, 35.0),
        invert_scale: true,
    },
    SubCriterionDefinition {
        id: "rent-collection",
        label: "Rent Collection Rate",
        weight: 0.10,
        description: "Percentage of billed rent actually collected over last 12 months",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Collected ÷ Billed (last 12m)",
        benchmark: Benchmark::new(90.0, 95.0, 98.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "break-even-ratio",
        label: "Break-even Ratio",
        weight: 0.10,
        description: "Operating expenses plus debt service as percentage of EGI (lower is better)",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "(OpEx + Debt Service) ÷ EGI",
        benchmark: Benchmark::new(90.0, 80.0, 70.0),
        invert_scale: true,
    },
];

const APPRECIATION: &[SubCriterionDefinition] = &[
    SubCriterionDefinition {
        id: "market-price-growth",
        label: "Market Price Growth",
        weight: 0.25,
        description: "3-5 year historical CAGR of $/sqft or $/unit in submarket",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Local MLS / CoStar data - historical CAGR",
        benchmark: Benchmark::new(2.0, 5.0, 8.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "supply-pipeline",
        label: "Supply Pipeline vs Demand",
        weight: 0.20,
        description: "New units under construction relative to annual absorption",
        measurement_type: MeasurementType::Ratio,
        how_to_measure: "New units under construction ÷ annual absorption (last 3 yrs)",
        benchmark: Benchmark::new(1.5, 1.0, 0.5),
        invert_scale: true,
    },
    SubCriterionDefinition {
        id: "population-job-growth",
        label: "Population & Job Growth",
        weight: 0.20,
        description: "MSA or submarket population and employment forecasts",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Projected annual growth rate (next 5 yrs)",
        benchmark: Benchmark::new(1.0, 2.0, 4.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "forced-appreciation",
        label: "Forced Appreciation Upside",
        weight: 0.20,
        description: "Remaining value-add potential relative to current value gap",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Remaining value-add budget ÷ current value gap",
        benchmark: Benchmark::new(5.0, 15.0, 30.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "rent-growth-trend",
        label: "Rent Growth Trend",
        weight: 0.15,
        description: "Actual market rent CAGR over last 3-5 years",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Market rent CAGR last 3-5 yrs",
        benchmark: Benchmark::new(2.0, 4.0, 7.0),
        invert_scale: false,
    },
];

const FINANCING: &[SubCriterionDefinition] = &[
    SubCriterionDefinition {
        id: "dscr",
        label: "Debt Service Coverage Ratio",
        weight: 0.25,
        description: "NOI divided by annual debt service",
        measurement_type: MeasurementType::Ratio,
        how_to_measure: "NOI ÷ Annual Debt Service",
        benchmark: Benchmark::new(1.15, 1.35, 1.8),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "ltv",
        label: "Loan-to-Value (LTV)",
        weight: 0.25,
        description: "Current loan balance relative to realistic current value (lower is better)",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Current loan balance ÷ current realistic value",
        benchmark: Benchmark::new(80.0, 65.0, 55.0),
        invert_scale: true,
    },
    SubCriterionDefinition {
        id: "interest-rate-spread",
        label: "Interest Rate vs Market",
        weight: 0.20,
        description: "Current rate compared to prevailing commercial rates",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Current rate vs prevailing 5/7/10-yr commercial rates",
        benchmark: Benchmark::new(1.0, 0.0, -0.5),
        invert_scale: true,
    },
    SubCriterionDefinition {
        id: "prepayment-flexibility",
        label: "Prepayment & Assumability",
        weight: 0.15,
        description: "Prepayment penalties and loan assumability terms",
        measurement_type: MeasurementType::Score,
        how_to_measure: "No or low prepay + assumable = high score",
        benchmark: Benchmark::new(3.0, 5.0, 8.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "maturity-profile",
        label: "Maturity & Extension Options",
        weight: 0.15,
        description: "Years to maturity plus available extensions",
        measurement_type: MeasurementType::Years,
        how_to_measure: "Years to maturity + extensions available",
        benchmark: Benchmark::new(2.0, 5.0, 10.0),
        invert_scale: false,
    },
];

const LOCATION: &[SubCriterionDefinition] = &[
    SubCriterionDefinition {
        id: "walk-transit-score",
        label: "Walk Score / Transit Score",
        weight: 0.20,
        description: "Walkability and public transit accessibility",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Walkscore.com or equivalent (0-100)",
        benchmark: Benchmark::new(40.0, 70.0, 90.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "economic-drivers",
        label: "Economic Drivers Proximity",
        weight: 0.20,
        description: "Distance to major employers, universities, hospitals",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Proximity score to major economic anchors",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "school-quality",
        label: "School Quality",
        weight: 0.15,
        description: "Quality of nearby schools (residential properties)",
        measurement_type: MeasurementType::Score,
        how_to_measure: "GreatSchools rating or state percentile",
        benchmark: Benchmark::new(4.0, 7.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "crime-index",
        label: "Crime Index",
        weight: 0.15,
        description: "Crime rate relative to national/MSA average (lower is better)",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Crime index vs national/MSA average",
        benchmark: Benchmark::new(150.0, 100.0, 50.0),
        invert_scale: true,
    },
    SubCriterionDefinition {
        id: "submarket-performance",
        label: "Submarket vs MSA Performance",
        weight: 0.15,
        description: "Vacancy and rent trends relative to broader market",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Submarket vacancy & rent trend vs MSA",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "zoning-upside",
        label: "Zoning / Entitlement Upside",
        weight: 0.15,
        description: "Ability to add units, change use, or redevelop",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Potential for rezoning, additional units, or use change",
        benchmark: Benchmark::new(2.0, 5.0, 8.0),
        invert_scale: false,
    },
];

const CONDITION: &[SubCriterionDefinition] = &[
    SubCriterionDefinition {
        id: "effective-age",
        label: "Effective Age / Remaining Life",
        weight: 0.25,
        description: "Adjusted age considering renovations vs typical lifespan",
        measurement_type: MeasurementType::Years,
        how_to_measure: "(Chronological age - renovations) vs typical lifespan",
        benchmark: Benchmark::new(30.0, 15.0, 5.0),
        invert_scale: true,
    },
    SubCriterionDefinition {
        id: "building-class",
        label: "Building Class",
        weight: 0.20,
        description: "True A/B/C classification (not sponsor marketing)",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Objective building class assessment",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "recent-capex",
        label: "Recent CapEx History",
        weight: 0.20,
        description: "Capital expenditures per unit/sqft over last 3-5 years",
        measurement_type: MeasurementType::Currency,
        how_to_measure: "$ spent per unit/sqft last 3-5 yrs",
        benchmark: Benchmark::new(1000.0, 5000.0, 15000.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "deferred-maintenance",
        label: "Deferred Maintenance",
        weight: 0.20,
        description: "Third-party PCA estimate relative to current value (lower is better)",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Third-party PCA $ ÷ current value",
        benchmark: Benchmark::new(15.0, 8.0, 2.0),
        invert_scale: true,
    },
    SubCriterionDefinition {
        id: "systems-condition",
        label: "Major Systems Condition",
        weight: 0.15,
        description: "Remaining useful life of HVAC, roof, elevators, plumbing",
        measurement_type: MeasurementType::Years,
        how_to_measure: "Years remaining on major systems (weighted avg)",
        benchmark: Benchmark::new(5.0, 12.0, 20.0),
        invert_scale: false,
    },
];

const TENANCY: &[SubCriterionDefinition] = &[
    SubCriterionDefinition {
        id: "tenant-credit",
        label: "Tenant Credit Quality",
        weight: 0.30,
        description: "Percentage of rent from investment-grade or strong regional tenants",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "% of rent from investment-grade or strong regional tenants",
        benchmark: Benchmark::new(20.0, 50.0, 90.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "walt",
        label: "Weighted Avg Lease Term (WALT)",
        weight: 0.25,
        description: "Weighted average remaining lease term in years",
        measurement_type: MeasurementType::Years,
        how_to_measure: "WALT in years",
        benchmark: Benchmark::new(2.0, 4.0, 7.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "rollover-risk",
        label: "Lease Rollover Risk (36m)",
        weight: 0.20,
        description: "Percentage of rent rolling over in next 36 months (lower is better)",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "% of rent rolling in next 36 months",
        benchmark: Benchmark::new(50.0, 30.0, 10.0),
        invert_scale: true,
    },
    SubCriterionDefinition {
        id: "rent-vs-market",
        label: "In-Place Rent vs Market",
        weight: 0.15,
        description: "Current rents relative to market rates",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "In-place rent ÷ current market rent",
        benchmark: Benchmark::new(85.0, 95.0, 105.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "tenant-diversity",
        label: "Tenant Diversity",
        weight: 0.10,
        description: "Concentration risk - percentage from top tenant (lower is better)",
        measurement_type: MeasurementType::Percentage,
        how_to_measure: "Herfindahl index or % from top tenant",
        benchmark: Benchmark::new(50.0, 30.0, 15.0),
        invert_scale: true,
    },
];

const LIQUIDITY: &[SubCriterionDefinition] = &[
    SubCriterionDefinition {
        id: "asset-class-liquidity",
        label: "Asset Class Liquidity",
        weight: 0.30,
        description: "Inherent liquidity of asset type (MF/Industrial highest, Hotels/Land lowest)",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Multifamily & industrial = highest; hotels & land = lowest",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "transaction-velocity",
        label: "Transaction Velocity",
        weight: 0.25,
        description: "Days on market and sales volume in submarket",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Days on market & sales volume last 24m",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "buyer-pool-depth",
        label: "Buyer Pool Depth",
        weight: 0.20,
        description: "Breadth of potential buyers (local, national, institutional)",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Local + national + institutional interest level",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "tokenized-secondary",
        label: "Tokenized Secondary Market",
        weight: 0.15,
        description: "Historical trading volume on the secondary market for similar assets",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Secondary-market trading volume for similar assets",
        benchmark: Benchmark::new(2.0, 5.0, 8.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "hold-period-flexibility",
        label: "Hold Period Flexibility",
        weight: 0.10,
        description: "Absence of forced sale triggers (loan maturity, franchise expiration)",
        measurement_type: MeasurementType::Score,
        how_to_measure: "No major loan maturity or franchise expiration forcing sale",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
];

const COMPLIANCE: &[SubCriterionDefinition] = &[
    SubCriterionDefinition {
        id: "title-survey",
        label: "Title & Survey",
        weight: 0.25,
        description: "Clean title report with no material exceptions",
        measurement_type: MeasurementType::Boolean,
        how_to_measure: "Clean title report, no exceptions",
        benchmark: Benchmark::new(0.0, 0.5, 1.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "environmental",
        label: "Environmental (Phase I ESA)",
        weight: 0.25,
        description: "No Recognized Environmental Conditions",
        measurement_type: MeasurementType::Boolean,
        how_to_measure: "Phase I ESA - no RECs",
        benchmark: Benchmark::new(0.0, 0.5, 1.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "zoning-permits",
        label: "Zoning & Permits",
        weight: 0.20,
        description: "Current use fully conforming to zoning and permits",
        measurement_type: MeasurementType::Boolean,
        how_to_measure: "Current use fully conforming",
        benchmark: Benchmark::new(0.0, 0.5, 1.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "insurance-coverage",
        label: "Insurance Coverage",
        weight: 0.15,
        description: "Full replacement cost coverage without major exclusions",
        measurement_type: MeasurementType::Boolean,
        how_to_measure: "Full replacement cost, no major exclusions",
        benchmark: Benchmark::new(0.0, 0.5, 1.0),
        invert_scale: false,
    },
    SubCriterionDefinition {
        id: "guardian-verification",
        label: "Guardian Verification",
        weight: 0.15,
        description: "Full Guardian audit completed and clean",
        measurement_type: MeasurementType::Score,
        how_to_measure: "Guardian verification status (0-10)",
        benchmark: Benchmark::new(3.0, 6.0, 9.0),
        invert_scale: false,
    },
];

