// src/catalog/fields.rs

//! Byte offsets of the natality public-use file, 2018 layout and later.
//!
//! Positions are zero-based and half-open. Order is the published variable
//! order, which is not sorted by offset (the prenatal-care block at the end
//! sits at 225..252).

use super::{FieldDef, FieldKind::*};

macro_rules! field {
    ($name:literal, $column:literal, $start:literal .. $end:literal, $kind:ident, $desc:literal) => {
        FieldDef {
            name: $name,
            column: $column,
            description: $desc,
            start: $start,
            end: $end,
            kind: $kind,
        }
    };
}

pub static FIELDS: &[FieldDef] = &[
    field!("YearOfBirth", "dob_yy", 8..12, Integer, "Birth Year"),
    field!("MonthOfBirth", "dob_mm", 12..14, Integer, "Birth Month"),
    field!("BirthPlace", "bfacil", 31..32, Integer, "Birth Place"),
    field!("ReportingFlagForBirthPlace", "f_bfacil", 32..33, Integer, "Reporting Flag for Birth Place"),
    field!("MothersAgeImputed", "mage_impflg", 72..73, NullableInteger, "Mother's Age Imputed"),
    field!("ReportedAgeOfMotherUsedFlag", "mage_repflg", 73..74, NullableInteger, "Reported Age of Mother Used Flag"),
    field!("MothersSingleYearsOfAge", "mager", 74..76, Integer, "Mother's Single Years of Age"),
    field!("MothersAgeRecode14", "mager14", 76..78, Integer, "Mother's Age Recode 14"),
    field!("MothersAgeRecode9", "mager9", 78..79, Integer, "Mother's Age Recode 9"),
    field!("MothersNativity", "mbstate_rec", 83..84, Integer, "Mother's Nativity"),
    field!("ResidenceStatus", "restatus", 103..104, Integer, "Residence Status"),
    field!("MothersRaceRecode31", "mrace31", 104..106, Integer, "Mother's Race Recode 31"),
    field!("MothersRaceRecode6", "mrace6", 106..107, Integer, "Mother's Race Recode 6"),
    field!("MothersRaceRecode15", "mrace15", 107..109, Integer, "Mother's Race Recode 15"),
    field!("MothersRaceImputedFlag", "mraceimp", 110..111, NullableInteger, "Mother's Race Imputed Flag"),
    field!("MothersHispanicOrigin", "mhispx", 111..112, Integer, "Mother's Hispanic Origin"),
    field!("MothersHispanicOriginRecode", "mhisp_r", 114..115, Integer, "Mother's Hispanic Origin Recode"),
    field!("ReportingFlagForMothersOrigin", "f_mhisp", 115..116, Integer, "Reporting Flag for Mother's Origin"),
    field!("MothersRaceHispanicOrigin", "mracehisp", 116..117, Integer, "Mother's Race/Hispanic Origin"),
    field!("PaternityAcknowledged", "mar_p", 118..119, Character, "Paternity Acknowledged"),
    field!("MaritalStatus", "dmar", 119..120, Integer, "Marital Status"),
    field!("MothersMaritalStatusImputed", "mar_imp", 120..121, NullableInteger, "Mother's Marital Status Imputed"),
    field!("ReportingFlagForPaternityAcknowledged", "f_mar_p", 122..123, Integer, "Reporting Flag for Paternity Acknowledged"),
    field!("MothersEducation", "meduc", 123..124, Integer, "Mother's Education"),
    field!("ReportingFlagForEducationOfMother", "f_meduc", 125..126, Integer, "Reporting Flag for Education of Mother"),
    field!("FathersReportedAgeUsed", "fagerpt_flg", 141..142, NullableInteger, "Father's Reported Age Used"),
    field!("FathersCombinedAge", "fagecomb", 146..148, Integer, "Father's Combined Age"),
    field!("FathersAgeRecode11", "fagerec11", 148..150, Integer, "Father's Age Recode 11"),
    field!("FathersRaceRecode31", "frace31", 150..152, Integer, "Father's Race Recode 31"),
    field!("FathersRaceRecode6", "frace6", 152..153, Integer, "Father's Race Recode 6"),
    field!("FathersRaceRecode15", "frace15", 153..155, Integer, "Father's Race Recode 15"),
    field!("FathersHispanicOrigin", "fhispx", 158..159, Integer, "Father's Hispanic Origin"),
    field!("FathersHispanicOriginRecode", "fhisp_r", 159..160, Integer, "Father's Hispanic Origin Recode"),
    field!("ReportingFlagForFathersHispanicOrigin", "f_fhisp", 160..161, Integer, "Reporting Flag for Father's Hispanic Origin"),
    field!("FathersRaceHispanicOrigin", "fracehisp", 161..162, Integer, "Father's Race/Hispanic Origin"),
    field!("FathersEducation", "feduc", 162..163, Integer, "Father's Education"),
    field!("NumberOfPreviousLiveBirths", "priorlive", 170..172, Integer, "Number of Previous Live Births"),
    field!("NumberOfPreviousOtherPregnancyOutcomes", "priordead", 172..174, Integer, "Number of Previous Other Pregnancy Outcomes"),
    field!("NumberOfPreviousTerminations", "priorterm", 174..176, Integer, "Number of Previous Terminations"),
    field!("LiveBirthOrderRecode", "lbo_rec", 178..179, Integer, "Live Birth Order Recode"),
    field!("TotalBirthOrderRecode", "tbo_rec", 181..182, Integer, "Total Birth Order Recode"),
    field!("MonthPrenatalCareBegan", "precare", 223..225, Integer, "Month Prenatal Care Began"),
    field!("PaymentSourceForDelivery", "pay", 434..435, Integer, "Payment Source for Delivery"),
    field!("PaymentRecode", "pay_rec", 435..436, Integer, "Payment Recode"),
    field!("ReportingFlagForSourceOfPayment", "f_pay", 436..437, Integer, "Reporting Flag for Source of Payment"),
    field!("ReportingFlagForPaymentRecode", "f_pay_rec", 437..438, Integer, "Reporting Flag for Payment Recode"),
    field!("SexOfInfant", "sex", 474..475, Character, "Sex of Infant"),
    field!("ImputedSex", "imp_sex", 475..476, NullableInteger, "Imputed Sex"),
    field!("Anencephaly", "ca_anen", 536..537, Character, "Anencephaly"),
    field!("MeningomyeloceleSpinaBifida", "ca_mnsb", 537..538, Character, "Meningomyelocele / Spina Bifida"),
    field!("CyanoticCongenitalHeartDisease", "ca_cchd", 538..539, Character, "Cyanotic Congenital Heart Disease"),
    field!("CongenitalDiaphragmaticHernia", "ca_cdh", 539..540, Character, "Congenital Diaphragmatic Hernia"),
    field!("Omphalocele", "omph", 540..541, Character, "Omphalocele"),
    field!("Gastroschisis", "ca_gast", 541..542, Character, "Gastroschisis"),
    field!("ReportingFlagForAnencephaly", "f_ca_anen", 542..543, Integer, "Reporting Flag for Anencephaly"),
    field!("ReportingFlagForMeningomyeloceleSpinaBifida", "f_ca_menin", 543..544, Integer, "Reporting Flag for Meningomyelocele/Spina Bifida"),
    field!("ReportingFlagForCyanoticCongenitalHeartDisease", "f_ca_heart", 544..545, Integer, "Reporting Flag for Cyanotic Congenital Heart Disease"),
    field!("ReportingFlagForCongenitalDiaphragmaticHernia", "f_ca_hernia", 545..546, Integer, "Reporting Flag for Congenital Diaphragmatic Hernia"),
    field!("ReportingFlagForOmphalocele", "f_ca_ompha", 546..547, Integer, "Reporting Flag for Omphalocele"),
    field!("ReportingFlagForGastroschisis", "f_ca_gastro", 547..548, Integer, "Reporting Flag for Gastroschisis"),
    field!("LimbReductionDefect", "ca_limb", 548..549, Character, "Limb Reduction Defect"),
    field!("CleftLipWithOrWithoutCleftPalate", "ca_cleft", 549..550, Character, "Cleft Lip w/ or w/o Cleft Palate"),
    field!("CleftPalateAlone", "ca_clpal", 550..551, Character, "Cleft Palate alone"),
    field!("DownSyndrome", "ca_down", 551..552, Character, "Down Syndrome"),
    field!("SuspectedChromosomalDisorder", "ca_disor", 552..553, Character, "Suspected Chromosomal Disorder"),
    field!("Hypospadias", "ca_hypo", 553..554, Character, "Hypospadias"),
    field!("ReportingFlagForLimbReductionDefect", "f_ca_limb", 554..555, Integer, "Reporting Flag for Limb Reduction Defect"),
    field!("ReportingFlagForCleftLipWithOrWithoutCleftPalate", "f_ca_cleft", 555..556, Integer, "Reporting Flag for Cleft Lip with or without Cleft Palate"),
    field!("ReportingFlagForCleftPalateAlone", "f_ca_clpal", 556..557, Integer, "Reporting Flag for Cleft Palate Alone"),
    field!("ReportingFlagForDownSyndrome", "f_ca_down", 557..558, Integer, "Reporting Flag for Down Syndrome"),
    field!("ReportingFlagForSuspectedChromosomalDisorder", "f_ca_disor", 558..559, Integer, "Reporting Flag for Suspected Chromosomal Disorder"),
    field!("ReportingFlagForHypospadias", "f_ca_hypo", 559..560, Integer, "Reporting Flag for Hypospadias"),
    field!("NoCongenitalAnomaliesChecked", "no_congen", 560..561, Integer, "No Congenital Anomalies Checked"),
    field!("ReportingFlagForMonthPrenatalCareBegan", "f_mpcb", 225..226, Integer, "Reporting Flag for Month Prenatal Care Began"),
    field!("MonthPrenatalCareBeganRecode", "precare5", 226..227, Integer, "Month Prenatal Care Began Recode"),
    field!("NumberOfPrenatalVisits", "previs", 237..239, Integer, "Number of Prenatal Visits"),
    field!("NumberOfPrenatalVisitsRecode", "previs_rec", 241..243, Integer, "Number of Prenatal Visits Recode"),
    field!("ReportingFlagForTotalPrenatalCareVisits", "f_tpcv", 243..244, Integer, "Reporting Flag for Total Prenatal Care Visits"),
    field!("WIC", "wic", 250..251, Character, "WIC"),
    field!("ReportingFlagForWIC", "f_wic", 251..252, Integer, "Reporting Flag for WIC"),
];
