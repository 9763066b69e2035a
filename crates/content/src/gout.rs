//! Gout and the crystal and urate disorders it is confused with.

use catalog_core::{
    CatalogRecord, CatalogResult, CategoryTag, DomainCollection, PlaceholderScan, QualityNote,
    QueryProfile, RecordCheck, SchemaViolation,
};
use serde::Serialize;

use crate::strings;

pub const COLLECTION: &str = "musculoskeletal-gout";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoutCategory {
    Acute,
    Chronic,
    Mimic,
    Renal,
    Metabolic,
}

impl CategoryTag for GoutCategory {
    const ALL: &'static [Self] = &[
        Self::Acute,
        Self::Chronic,
        Self::Mimic,
        Self::Renal,
        Self::Metabolic,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Acute => "acute",
            Self::Chronic => "chronic",
            Self::Mimic => "mimic",
            Self::Renal => "renal",
            Self::Metabolic => "metabolic",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoutCondition {
    pub id: String,
    pub name: String,
    pub name_es: String,
    pub category: GoutCategory,
    pub icd11: String,
    pub description: String,
    pub pathophysiology: String,
    pub clinical_features: Vec<String>,
    pub triggers: Vec<String>,
    pub diagnostics: Vec<String>,
    pub treatment: Vec<String>,
    pub complications: Vec<String>,
    pub patient_explanation: String,
    pub emergency_signs: Vec<String>,
}

impl CatalogRecord for GoutCondition {
    type Category = GoutCategory;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> GoutCategory {
        self.category
    }

    fn query_profile() -> QueryProfile<Self> {
        QueryProfile::<Self>::new("triggers", |g| g.triggers.as_slice())
            .text("name", |g| g.name.as_str())
            .text("nameEs", |g| g.name_es.as_str())
            .text("description", |g| g.description.as_str())
            .text("pathophysiology", |g| g.pathophysiology.as_str())
            .list("clinicalFeatures", |g| g.clinical_features.as_slice())
            .text("patientExplanation", |g| g.patient_explanation.as_str())
    }

    fn validate(&self) -> Result<(), SchemaViolation> {
        RecordCheck::for_id(&self.id)?
            .text("name", &self.name)?
            .text("nameEs", &self.name_es)?
            .icd11("icd11", &self.icd11)?
            .text("description", &self.description)?
            .text("pathophysiology", &self.pathophysiology)?
            .list("clinicalFeatures", &self.clinical_features)?
            .list("triggers", &self.triggers)?
            .list("diagnostics", &self.diagnostics)?
            .list("treatment", &self.treatment)?
            .list("complications", &self.complications)?
            .text("patientExplanation", &self.patient_explanation)?
            .list("emergencySigns", &self.emergency_signs)?;
        Ok(())
    }

    fn quality_notes(&self) -> Vec<QualityNote> {
        PlaceholderScan::new()
            .text("description", &self.description)
            .text("pathophysiology", &self.pathophysiology)
            .list("clinicalFeatures", &self.clinical_features)
            .list("triggers", &self.triggers)
            .list("diagnostics", &self.diagnostics)
            .list("treatment", &self.treatment)
            .list("complications", &self.complications)
            .text("patientExplanation", &self.patient_explanation)
            .list("emergencySigns", &self.emergency_signs)
            .finish()
    }
}

pub fn collection() -> CatalogResult<DomainCollection<GoutCondition>> {
    DomainCollection::new(COLLECTION, conditions())
}

fn conditions() -> Vec<GoutCondition> {
    vec![
        GoutCondition {
            id: "acute-gout-flare".into(),
            name: "Acute Gout Flare".into(),
            name_es: "Ataque agudo de gota".into(),
            category: GoutCategory::Acute,
            icd11: "FA25.0".into(),
            description: "Sudden, intensely painful inflammatory monoarthritis caused by monosodium urate crystals, classically at the first metatarsophalangeal joint.".into(),
            pathophysiology: "Shed urate crystals are phagocytosed by macrophages, activating the NLRP3 inflammasome. IL-1 beta release recruits neutrophils and produces intense synovitis that resolves spontaneously over one to two weeks.".into(),
            clinical_features: strings(&[
                "Podagra: swelling of the big toe joint",
                "Pain peaking within 24 hours",
                "Erythema, warmth and exquisite tenderness",
                "Low-grade fever possible",
            ]),
            triggers: strings(&[
                "Alcohol, especially beer",
                "Purine-rich meals (red meat, shellfish)",
                "Fructose-sweetened drinks",
                "Thiazide or loop diuretics",
                "Dehydration",
                "Recent surgery or acute illness",
                "Starting urate-lowering therapy without prophylaxis",
            ]),
            diagnostics: strings(&[
                "Synovial fluid: negatively birefringent needle-shaped crystals",
                "Serum urate (may be normal during a flare)",
                "Exclude septic arthritis when fever is present",
            ]),
            treatment: strings(&[
                "NSAIDs, colchicine or glucocorticoids started early",
                "Rest, elevation and ice",
                "Continue existing allopurinol during the flare",
            ]),
            complications: strings(&[
                "Recurrent flares",
                "Progression to chronic tophaceous gout",
            ]),
            patient_explanation: "Gout happens when uric acid forms tiny sharp crystals inside a joint, usually the big toe. It causes sudden, intense pain and swelling. Anti-inflammatory medicine settles the attack, and other medicine can stop it from coming back.".into(),
            emergency_signs: strings(&[
                "Fever with a hot swollen joint (exclude septic arthritis)",
                "Inability to bear weight",
            ]),
        },
        GoutCondition {
            id: "chronic-tophaceous-gout".into(),
            name: "Chronic Tophaceous Gout".into(),
            name_es: "Gota tofácea crónica".into(),
            category: GoutCategory::Chronic,
            icd11: "FA25.2".into(),
            description: "Long-standing uncontrolled hyperuricaemia with deposits of urate (tophi) in joints and soft tissues and persistent arthritis between flares.".into(),
            pathophysiology: "Years of urate supersaturation allow crystals to accumulate as granulomatous tophi surrounded by macrophages. Tophi erode adjacent bone, producing punched-out erosions with overhanging edges.".into(),
            clinical_features: strings(&[
                "Firm, chalky nodules on ears, elbows and fingers",
                "Polyarticular arthritis",
                "Joint deformity",
                "Frequent flares",
            ]),
            triggers: strings(&[
                "Stopping urate-lowering therapy",
                "Alcohol",
                "Chronic kidney disease",
                "Diuretics",
            ]),
            diagnostics: strings(&[
                "Aspiration of a tophus showing urate crystals",
                "Plain radiographs for erosions",
                "Dual-energy CT to map urate deposits",
            ]),
            treatment: strings(&[
                "Allopurinol titrated to serum urate below 5 mg/dL",
                "Febuxostat if allopurinol is not tolerated",
                "Pegloticase for refractory tophaceous disease",
                "Low-dose colchicine prophylaxis for the first months",
            ]),
            complications: strings(&[
                "Joint destruction",
                "Ulcerated or infected tophi",
                "Nerve compression",
            ]),
            patient_explanation: "When uric acid stays high for years, lumps of crystals called tophi build up under the skin and in joints. Daily medicine that lowers uric acid slowly dissolves them and prevents further joint damage.".into(),
            emergency_signs: strings(&["Red, draining or rapidly enlarging tophus (possible infection)"]),
        },
        GoutCondition {
            id: "cppd-pseudogout".into(),
            name: "Calcium Pyrophosphate Deposition Disease (Pseudogout)".into(),
            name_es: "Enfermedad por depósito de pirofosfato cálcico (pseudogota)".into(),
            category: GoutCategory::Mimic,
            icd11: "FA25.1".into(),
            description: "Crystal arthropathy caused by calcium pyrophosphate crystals that mimics gout, most often in the knee or wrist of older adults.".into(),
            pathophysiology: "Calcium pyrophosphate crystals deposit in cartilage (chondrocalcinosis) and are shed into the joint, activating the same inflammasome pathway as urate.".into(),
            clinical_features: strings(&[
                "Acute mono-arthritis of the knee",
                "Chondrocalcinosis on radiographs",
                "Chronic arthritis resembling osteoarthritis",
            ]),
            triggers: strings(&[
                "Surgery or acute illness",
                "Joint trauma",
                "Hyperparathyroidism",
                "Haemochromatosis",
                "Hypomagnesaemia",
            ]),
            diagnostics: strings(&[
                "Synovial fluid: weakly positively birefringent rhomboid crystals",
                "Radiographs for chondrocalcinosis",
                "Calcium, PTH, ferritin and magnesium",
            ]),
            treatment: strings(&[
                "NSAIDs or colchicine",
                "Intra-articular corticosteroid after excluding infection",
                "Treat the underlying metabolic disorder",
            ]),
            complications: strings(&[
                "Accelerated joint degeneration",
                "Crowned dens syndrome",
            ]),
            patient_explanation: "Pseudogout is caused by a different crystal, calcium pyrophosphate, building up in joints such as the knee. Unlike gout there is no medicine to remove the crystals, but anti-inflammatory treatment controls the attacks well.".into(),
            emergency_signs: strings(&[
                "Fever with an acutely swollen joint",
                "Acute neck pain and stiffness (crowned dens syndrome, exclude meningitis)",
            ]),
        },
        GoutCondition {
            id: "uric-acid-nephrolithiasis".into(),
            name: "Uric Acid Kidney Stones".into(),
            name_es: "Litiasis renal por ácido úrico".into(),
            category: GoutCategory::Renal,
            icd11: "GB70.0".into(),
            description: "Kidney stones formed from uric acid in persistently acidic urine, common in people with gout and metabolic syndrome.".into(),
            pathophysiology: "Low urinary pH converts urate to poorly soluble uric acid, which crystallises and grows into radiolucent stones.".into(),
            clinical_features: strings(&[
                "Colicky flank pain radiating to the groin",
                "Haematuria",
                "Radiolucent stone on plain film",
            ]),
            triggers: strings(&[
                "Low fluid intake",
                "High animal-protein diet",
                "Chronic diarrhoea",
                "Insulin resistance",
            ]),
            diagnostics: strings(&[
                "Non-contrast CT",
                "Urinalysis with pH",
                "24-hour urine uric acid",
            ]),
            treatment: strings(&[
                "Urinary alkalinisation with potassium citrate",
                "High fluid intake",
                "Allopurinol for recurrent stones with hyperuricosuria",
            ]),
            complications: strings(&["Obstructive uropathy", "Urate nephropathy"]),
            patient_explanation: "Too much uric acid in acidic urine can form stones in the kidney. Drinking plenty of water and medicine that makes urine less acidic can dissolve them.".into(),
            emergency_signs: strings(&[
                "Fever with flank pain (infected obstructed kidney)",
                "No urine output",
            ]),
        },
        GoutCondition {
            id: "asymptomatic-hyperuricemia".into(),
            name: "Asymptomatic Hyperuricaemia".into(),
            name_es: "Hiperuricemia asintomática".into(),
            category: GoutCategory::Metabolic,
            icd11: "5C55.Y".into(),
            description: "Serum urate above 6.8 mg/dL without gout flares, tophi or stones. Most people with hyperuricaemia never develop gout.".into(),
            pathophysiology: "Under-excretion of urate by the kidney accounts for most cases; overproduction arises from high cell turnover or inherited enzyme defects.".into(),
            clinical_features: strings(&[
                "No symptoms",
                "Often found on routine blood tests",
                "Associated with obesity, hypertension and kidney disease",
            ]),
            triggers: strings(&[
                "Obesity",
                "Thiazide diuretics",
                "Low-dose aspirin",
                "Alcohol",
                "High-fructose diet",
            ]),
            diagnostics: strings(&["Serum urate", "Renal function", "Metabolic screen"]),
            treatment: strings(&[
                "Lifestyle measures",
                "Review urate-raising medicines",
                "Urate-lowering drugs are not routinely recommended",
            ]),
            complications: strings(&["Later gout", "Uric acid stones"]),
            patient_explanation: "Your uric acid is higher than usual but it is not causing any problems. Weight loss, less alcohol and fewer sugary drinks can bring it down.".into(),
            emergency_signs: strings(&["Sudden painful swollen joint (first gout flare)"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_one_condition() {
        let c = collection().expect("gout collection should build");
        assert_eq!(c.count(), 5);
        assert!(c.category_counts().iter().all(|(_, n)| *n == 1));
    }

    #[test]
    fn alcohol_is_a_shared_trigger() {
        let c = collection().expect("gout collection should build");
        let ids: Vec<_> = c.filter_by_attribute("alcohol").iter().map(|g| g.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "acute-gout-flare",
                "chronic-tophaceous-gout",
                "asymptomatic-hyperuricemia"
            ]
        );
    }

    #[test]
    fn search_covers_spanish_names() {
        let c = collection().expect("gout collection should build");
        let ids: Vec<_> = c.search("pseudogota").iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["cppd-pseudogout"]);
    }

    #[test]
    fn triggers_are_not_free_text_searchable() {
        let c = collection().expect("gout collection should build");
        assert!(c.search("fructose-sweetened").is_empty());
        assert_eq!(c.filter_by_attribute("fructose-sweetened").len(), 1);
    }
}
