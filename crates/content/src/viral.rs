//! Viral infections.

use catalog_core::{
    CatalogRecord, CatalogResult, CategoryTag, DomainCollection, PlaceholderScan, QualityNote,
    QueryProfile, RecordCheck, SchemaViolation,
};
use serde::Serialize;

use crate::strings;

pub const COLLECTION: &str = "infectious-viral";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViralCategory {
    Respiratory,
    Hepatic,
    Exanthem,
    Neurologic,
    VectorBorne,
}

impl CategoryTag for ViralCategory {
    const ALL: &'static [Self] = &[
        Self::Respiratory,
        Self::Hepatic,
        Self::Exanthem,
        Self::Neurologic,
        Self::VectorBorne,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Respiratory => "respiratory",
            Self::Hepatic => "hepatic",
            Self::Exanthem => "exanthem",
            Self::Neurologic => "neurologic",
            Self::VectorBorne => "vector-borne",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViralInfection {
    pub id: String,
    pub name: String,
    pub name_es: String,
    pub category: ViralCategory,
    pub icd11: String,
    pub pathogen: String,
    pub description: String,
    pub pathophysiology: String,
    pub symptoms: Vec<String>,
    pub transmission: Vec<String>,
    pub diagnostics: Vec<String>,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub patient_explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_explanation_es: Option<String>,
    pub emergency_signs: Vec<String>,
}

impl CatalogRecord for ViralInfection {
    type Category = ViralCategory;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> ViralCategory {
        self.category
    }

    fn query_profile() -> QueryProfile<Self> {
        QueryProfile::<Self>::new("transmission", |v| v.transmission.as_slice())
            .text("name", |v| v.name.as_str())
            .text("nameEs", |v| v.name_es.as_str())
            .text("pathogen", |v| v.pathogen.as_str())
            .text("description", |v| v.description.as_str())
            .text("pathophysiology", |v| v.pathophysiology.as_str())
            .list("symptoms", |v| v.symptoms.as_slice())
            .text("patientExplanation", |v| v.patient_explanation.as_str())
            .optional("patientExplanationEs", |v| v.patient_explanation_es.as_deref())
    }

    fn validate(&self) -> Result<(), SchemaViolation> {
        RecordCheck::for_id(&self.id)?
            .text("name", &self.name)?
            .text("nameEs", &self.name_es)?
            .icd11("icd11", &self.icd11)?
            .text("pathogen", &self.pathogen)?
            .text("description", &self.description)?
            .text("pathophysiology", &self.pathophysiology)?
            .list("symptoms", &self.symptoms)?
            .list("transmission", &self.transmission)?
            .list("diagnostics", &self.diagnostics)?
            .list("treatment", &self.treatment)?
            .list("prevention", &self.prevention)?
            .text("patientExplanation", &self.patient_explanation)?
            .optional_text("patientExplanationEs", self.patient_explanation_es.as_deref())?
            .list("emergencySigns", &self.emergency_signs)?;
        Ok(())
    }

    fn quality_notes(&self) -> Vec<QualityNote> {
        PlaceholderScan::new()
            .text("description", &self.description)
            .text("pathophysiology", &self.pathophysiology)
            .list("symptoms", &self.symptoms)
            .list("transmission", &self.transmission)
            .list("diagnostics", &self.diagnostics)
            .list("treatment", &self.treatment)
            .list("prevention", &self.prevention)
            .text("patientExplanation", &self.patient_explanation)
            .optional("patientExplanationEs", self.patient_explanation_es.as_deref())
            .list("emergencySigns", &self.emergency_signs)
            .finish()
    }
}

pub fn collection() -> CatalogResult<DomainCollection<ViralInfection>> {
    DomainCollection::new(COLLECTION, infections())
}

fn infections() -> Vec<ViralInfection> {
    vec![
        ViralInfection {
            id: "influenza".into(),
            name: "Influenza".into(),
            name_es: "Gripe".into(),
            category: ViralCategory::Respiratory,
            icd11: "1E32".into(),
            pathogen: "Influenza A and B viruses (Orthomyxoviridae)".into(),
            description: "Acute febrile respiratory illness occurring in seasonal epidemics, with high morbidity in older adults, pregnancy and chronic disease.".into(),
            pathophysiology: "Haemagglutinin binds sialic acid on respiratory epithelium; viral replication causes epithelial necrosis and a cytokine response. Antigenic drift causes yearly epidemics and antigenic shift causes pandemics.".into(),
            symptoms: strings(&[
                "Abrupt fever and chills",
                "Myalgia and headache",
                "Dry cough",
                "Sore throat",
                "Profound fatigue",
            ]),
            transmission: strings(&[
                "Respiratory droplets",
                "Aerosols in crowded indoor spaces",
                "Contaminated hands and surfaces",
            ]),
            diagnostics: strings(&["Rapid molecular assay (PCR) on nasopharyngeal swab"]),
            treatment: strings(&[
                "Oseltamivir within 48 hours for high-risk or hospitalised patients",
                "Rest, fluids and antipyretics",
            ]),
            prevention: strings(&["Annual vaccination", "Hand hygiene", "Staying home when ill"]),
            patient_explanation: "The flu is a virus that causes sudden fever, aches and cough. Most people recover in a week with rest and fluids. A yearly vaccine is the best protection.".into(),
            patient_explanation_es: Some("La gripe es un virus que causa fiebre repentina, dolores y tos. La vacuna anual es la mejor protección.".into()),
            emergency_signs: strings(&[
                "Difficulty breathing",
                "Chest pain",
                "Confusion",
                "Symptoms that improve then return with worse fever and cough",
            ]),
        },
        ViralInfection {
            id: "covid-19".into(),
            name: "COVID-19".into(),
            name_es: "COVID-19".into(),
            category: ViralCategory::Respiratory,
            icd11: "RA01.0".into(),
            pathogen: "SARS-CoV-2 (Coronaviridae)".into(),
            description: "Respiratory infection ranging from mild upper-airway illness to viral pneumonia, ARDS and thrombotic complications.".into(),
            pathophysiology: "Spike protein binds ACE2 on airway and alveolar cells. Severe disease reflects a dysregulated immune response with endothelial injury and hypercoagulability.".into(),
            symptoms: strings(&[
                "Fever",
                "Cough",
                "Loss of taste or smell",
                "Fatigue",
                "Shortness of breath",
            ]),
            transmission: strings(&[
                "Respiratory droplets",
                "Airborne aerosols",
                "Pre-symptomatic spread",
            ]),
            diagnostics: strings(&["RT-PCR", "Rapid antigen test", "Chest imaging when hypoxic"]),
            treatment: strings(&[
                "Supportive care",
                "Nirmatrelvir-ritonavir for high-risk outpatients",
                "Dexamethasone when oxygen is required",
            ]),
            prevention: strings(&["Vaccination", "Ventilation", "Masking in high-risk settings"]),
            patient_explanation: "COVID-19 is a virus that mostly affects the nose, throat and lungs. Most people have a cold- or flu-like illness, but older people and those with health problems can become very unwell.".into(),
            patient_explanation_es: None,
            emergency_signs: strings(&[
                "Trouble breathing",
                "Persistent chest pain or pressure",
                "Bluish lips or face",
            ]),
        },
        ViralInfection {
            id: "hepatitis-b".into(),
            name: "Hepatitis B".into(),
            name_es: "Hepatitis B".into(),
            category: ViralCategory::Hepatic,
            icd11: "1E51.0".into(),
            pathogen: "Hepatitis B virus (Hepadnaviridae)".into(),
            description: "Infection of the liver that can be acute or become chronic, leading to cirrhosis and hepatocellular carcinoma.".into(),
            pathophysiology: "Hepatocyte injury is immune-mediated by cytotoxic T cells. Persistence of covalently closed circular DNA in hepatocytes maintains chronic infection.".into(),
            symptoms: strings(&[
                "Often asymptomatic",
                "Jaundice",
                "Dark urine",
                "Right upper quadrant discomfort",
                "Fatigue",
            ]),
            transmission: strings(&[
                "Mother-to-child at birth",
                "Sexual contact",
                "Shared needles",
                "Blood exposure",
            ]),
            diagnostics: strings(&["HBsAg", "Anti-HBc IgM", "HBV DNA viral load", "Liver function tests"]),
            treatment: strings(&[
                "Tenofovir or entecavir for chronic active disease",
                "Surveillance ultrasound for liver cancer",
            ]),
            prevention: strings(&[
                "Universal infant vaccination",
                "Birth-dose vaccine and immunoglobulin for exposed newborns",
                "Safe injection practices",
            ]),
            patient_explanation: "Hepatitis B is a virus that infects the liver. Many people do not feel sick, but long-term infection can scar the liver. Medicines keep the virus under control and a vaccine prevents it.".into(),
            patient_explanation_es: Some("La hepatitis B es un virus que infecta el hígado. Existe una vacuna que la previene.".into()),
            emergency_signs: strings(&[
                "Confusion or extreme sleepiness (liver failure)",
                "Vomiting blood",
                "Rapidly deepening jaundice",
            ]),
        },
        ViralInfection {
            id: "measles".into(),
            name: "Measles".into(),
            name_es: "Sarampión".into(),
            category: ViralCategory::Exanthem,
            icd11: "1F03".into(),
            pathogen: "Measles virus (Paramyxoviridae)".into(),
            description: "Highly contagious childhood exanthem with fever, cough, coryza, conjunctivitis and a descending maculopapular rash.".into(),
            pathophysiology: "The virus infects respiratory epithelium and immune cells, spreads through lymphoid tissue and causes transient immune amnesia that raises the risk of secondary infection.".into(),
            symptoms: strings(&[
                "High fever",
                "Cough, runny nose and red eyes",
                "Koplik spots on the buccal mucosa",
                "Rash starting on the face and spreading down",
            ]),
            transmission: strings(&[
                "Airborne, remaining in room air for up to two hours",
                "Respiratory droplets",
            ]),
            diagnostics: strings(&["Measles IgM serology", "RT-PCR of throat swab or urine"]),
            treatment: strings(&["Supportive care", "Vitamin A supplementation in children"]),
            prevention: strings(&["Two doses of MMR vaccine", "Post-exposure vaccination"]),
            patient_explanation: "Measles is a very contagious virus that causes high fever and a rash that spreads from the face downward. Two doses of the MMR vaccine prevent it.".into(),
            patient_explanation_es: Some("El sarampión es un virus muy contagioso. Dos dosis de la vacuna triple viral lo previenen.".into()),
            emergency_signs: strings(&[
                "Fast or difficult breathing (pneumonia)",
                "Seizures or drowsiness (encephalitis)",
                "Signs of dehydration",
            ]),
        },
        ViralInfection {
            id: "hsv-encephalitis".into(),
            name: "Herpes Simplex Encephalitis".into(),
            name_es: "Encefalitis por herpes simple".into(),
            category: ViralCategory::Neurologic,
            icd11: "1F00.1".into(),
            pathogen: "Herpes simplex virus type 1".into(),
            description: "The most common cause of sporadic fatal encephalitis, with a predilection for the temporal lobes.".into(),
            pathophysiology: "Reactivated or primary HSV-1 reaches the temporal and frontal lobes via the olfactory or trigeminal route, causing haemorrhagic necrotising inflammation.".into(),
            symptoms: strings(&[
                "Fever and headache",
                "Confusion or behaviour change",
                "Seizures",
                "Speech disturbance",
            ]),
            transmission: strings(&["Reactivation of latent infection", "Close contact with oral lesions"]),
            diagnostics: strings(&[
                "CSF HSV PCR",
                "MRI showing temporal lobe changes",
                "EEG",
            ]),
            treatment: strings(&["Intravenous aciclovir started empirically without delay"]),
            prevention: strings(&["No vaccine available"]),
            patient_explanation: "This is a rare but serious infection of the brain by the cold sore virus. It causes fever, confusion and seizures and needs urgent antiviral treatment in hospital.".into(),
            patient_explanation_es: None,
            emergency_signs: strings(&["Any fever with confusion or seizure"]),
        },
        ViralInfection {
            id: "dengue".into(),
            name: "Dengue".into(),
            name_es: "Dengue".into(),
            category: ViralCategory::VectorBorne,
            icd11: "1D20".into(),
            pathogen: "Dengue virus serotypes 1-4 (Flaviviridae)".into(),
            description: "Mosquito-borne febrile illness of the tropics; secondary infection with a different serotype carries a higher risk of severe dengue with plasma leakage.".into(),
            pathophysiology: "Antibody-dependent enhancement during secondary infection increases viral load and cytokine release, increasing capillary permeability.".into(),
            symptoms: strings(&[
                "High fever",
                "Severe headache and pain behind the eyes",
                "Joint and muscle pain",
                "Rash",
                "Mild bleeding such as nosebleeds",
            ]),
            transmission: strings(&["Aedes mosquito bite", "Rarely blood transfusion"]),
            diagnostics: strings(&["NS1 antigen", "Dengue RT-PCR", "IgM serology", "Serial haematocrit and platelets"]),
            treatment: strings(&[
                "Oral or intravenous fluids",
                "Paracetamol for fever; avoid NSAIDs",
            ]),
            prevention: strings(&["Mosquito control", "Repellents and bed nets", "Vaccination in endemic areas"]),
            patient_explanation: "Dengue is spread by mosquito bites and causes high fever and severe body aches. Drink plenty of fluids, avoid ibuprofen and return quickly if warning signs appear.".into(),
            patient_explanation_es: Some("El dengue se transmite por la picadura de mosquitos. Beba muchos líquidos y evite el ibuprofeno.".into()),
            emergency_signs: strings(&[
                "Severe abdominal pain",
                "Persistent vomiting",
                "Bleeding gums or black stools",
                "Restlessness or lethargy as the fever falls",
            ]),
        },
    ]
}
