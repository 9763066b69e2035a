//! Five-level topic entries that tie the reference collections together.
//!
//! Topics link down to conditions in the other collections. Some links point at content that
//! has not been written yet; those stay in the graph as unresolved edges.

use catalog_core::{
    CatalogResult, CitationDraft, CitationKind, ClinicalRelevance, ContentTags, ContentType,
    CrossReferenceDraft, DomainCollection, Entry, EntryDraft, ExamRelevance, LevelDraft,
    MediaDraft, MediaKind, Relationship, Status,
};

use crate::strings;

pub const COLLECTION: &str = "topics";

const CREATED: &str = "2026-01-30T00:00:00.000Z";

pub fn collection() -> CatalogResult<DomainCollection<Entry>> {
    let entries = drafts()
        .into_iter()
        .map(EntryDraft::build)
        .collect::<Result<Vec<_>, _>>()?;
    DomainCollection::new(COLLECTION, entries)
}

fn drafts() -> Vec<EntryDraft> {
    vec![gout(), uric_acid_metabolism(), eye_anatomy()]
}

fn gout() -> EntryDraft {
    EntryDraft::new("gout", ContentType::Condition, "Gout")
        .name_es("Gota")
        .alternate_names(["Podagra", "Urate crystal arthritis"])
        .level(
            LevelDraft::new(
                1,
                "A painful swollen joint.",
                "Gout is a kind of arthritis. A joint, most often the big toe, suddenly becomes red, hot and very painful. The attack settles in a week or two.",
            )
            .key_term("Joint", "A place where two bones meet and move")
            .analogies(["Like tiny shards of glass inside the joint"]),
        )
        .level(
            LevelDraft::new(
                2,
                "Uric acid crystals inflame a joint.",
                "Uric acid is a normal waste product. When there is too much of it in the blood it can form needle-shaped crystals in a joint, and the body attacks them, causing sudden pain and swelling.",
            )
            .key_term("Uric acid", "A waste product made when the body breaks down purines")
            .counseling([
                "Drink plenty of water",
                "Limit beer and sugary drinks",
            ]),
        )
        .level(
            LevelDraft::new(
                3,
                "Monosodium urate crystals deposit when serum urate is high.",
                "Serum urate above about 6.8 mg/dL exceeds its solubility, so monosodium urate crystals form in and around joints. Flares are triggered by alcohol, purine-rich food, diuretics and sudden changes in urate level.",
            )
            .key_term_pronounced("Tophus", "A deposit of urate crystals under the skin", "TOE-fus")
            .key_term("Hyperuricaemia", "Serum urate above the saturation point")
            .examples(["A 55-year-old man wakes with a red, swollen big toe after a party"]),
        )
        .level(
            LevelDraft::new(
                4,
                "Crystal phagocytosis activates the NLRP3 inflammasome and IL-1 beta release.",
                "Macrophages engulf urate crystals and assemble the NLRP3 inflammasome, releasing IL-1 beta, which recruits neutrophils. Diagnosis rests on negatively birefringent needle-shaped crystals in synovial fluid; treatment splits into flare control and long-term urate lowering.",
            )
            .key_term("NLRP3 inflammasome", "Cytosolic complex that activates caspase-1 and IL-1 beta")
            .clinical_notes([
                "Serum urate may be normal during a flare; recheck two weeks later",
                "Always aspirate a hot joint when septic arthritis is possible",
            ]),
        )
        .level(
            LevelDraft::new(
                5,
                "Treat-to-target urate lowering below 6 mg/dL, with prophylaxis, prevents flares and dissolves tophi.",
                "Allopurinol titrated from a low dose (HLA-B*58:01 screening where prevalent) is first line; febuxostat and uricosurics are alternatives and pegloticase is reserved for refractory tophaceous disease. Colchicine prophylaxis for three to six months covers the early mobilisation flares.",
            )
            .key_term("Treat-to-target", "Titrating therapy to a predefined serum urate goal")
            .clinical_notes(["Do not stop allopurinol during an acute flare"]),
        )
        .cross_reference("uric-acid-metabolism", ContentType::Concept, Relationship::Related)
        .cross_reference("acute-gout-flare", ContentType::Condition, Relationship::Child)
        .cross_reference("chronic-tophaceous-gout", ContentType::Condition, Relationship::Child)
        .cross_reference("cppd-pseudogout", ContentType::Condition, Relationship::SeeAlso)
        .cross_reference("purine-rich-diet", ContentType::Topic, Relationship::SeeAlso)
        .media(MediaDraft {
            id: "gout-crystals-micrograph".into(),
            kind: Some(MediaKind::Image),
            filename: "gout-crystals.png".into(),
            title: "Urate crystals under polarised light".into(),
            description: Some("Negatively birefringent needle-shaped crystals".into()),
        })
        .citation(CitationDraft {
            id: "acr-2020-gout".into(),
            kind: Some(CitationKind::Guideline),
            title: "2020 American College of Rheumatology Guideline for the Management of Gout".into(),
            authors: strings(&["FitzGerald JD", "Dalbeth N", "Mikuls T"]),
            source: Some("Arthritis Care & Research".into()),
            year: Some(2020),
            url: None,
        })
        .tags(ContentTags {
            systems: strings(&["musculoskeletal"]),
            topics: strings(&["rheumatology", "crystal arthropathy"]),
            keywords: strings(&["uric acid", "podagra", "allopurinol", "colchicine"]),
            clinical_relevance: Some(ClinicalRelevance::High),
            exam_relevance: Some(ExamRelevance {
                usmle: true,
                nbme: true,
                shelf: strings(&["Internal Medicine"]),
            }),
        })
        .timestamps(CREATED, "2026-02-12T00:00:00.000Z")
        .version(2)
        .status(Status::Published)
}

fn uric_acid_metabolism() -> EntryDraft {
    EntryDraft::new(
        "uric-acid-metabolism",
        ContentType::Concept,
        "Uric Acid Metabolism",
    )
    .name_es("Metabolismo del ácido úrico")
    .level(
        LevelDraft::new(
            1,
            "How the body makes uric acid.",
            "Your body breaks down old cells and some foods into a waste called uric acid, which leaves mostly in urine.",
        )
        .key_term("Uric acid", "A waste product the kidneys remove in urine"),
    )
    .level(
        LevelDraft::new(
            2,
            "Purines are broken down into uric acid.",
            "Purines from food and from the body's own cells are broken down in the liver into uric acid. The kidneys remove about two thirds and the gut the rest.",
        )
        .key_term("Purine", "A building block of DNA and RNA"),
    )
    .level(
        LevelDraft::new(
            3,
            "Xanthine oxidase makes uric acid; kidneys excrete most of it.",
            "Xanthine oxidase converts hypoxanthine to xanthine and xanthine to uric acid. Humans lack uricase, so urate levels are higher than in most mammals. Under-excretion by the kidney explains most hyperuricaemia.",
        )
        .key_term("Xanthine oxidase", "Enzyme that produces uric acid; target of allopurinol"),
    )
    .level(
        LevelDraft::new(
            4,
            "Renal handling of urate depends on URAT1 and GLUT9 reabsorption and ABCG2 secretion.",
            "Filtered urate is largely reabsorbed in the proximal tubule by URAT1 and GLUT9, while ABCG2 secretes urate in the kidney and gut. Insulin, thiazides and low-dose aspirin increase reabsorption.",
        )
        .key_term("URAT1", "Apical urate-anion exchanger in the proximal tubule"),
    )
    .level(
        LevelDraft::new(
            5,
            "Genetic variants in urate transporters and uricase loss shape population risk of hyperuricaemia and gout.",
            "Genome-wide studies identify SLC2A9 and ABCG2 as the strongest urate loci; the ABCG2 Q141K variant reduces gut secretion. Loss of uricase in hominoids may have conferred antioxidant advantage at the cost of gout risk.",
        )
        .key_term("ABCG2", "ATP-binding cassette urate exporter")
        .clinical_notes(["ABCG2 dysfunction predicts poorer allopurinol response"]),
    )
    .cross_reference("gout", ContentType::Condition, Relationship::Related)
    .cross_reference("asymptomatic-hyperuricemia", ContentType::Condition, Relationship::Child)
    .cross_reference("uric-acid-nephrolithiasis", ContentType::Condition, Relationship::Child)
    .tags(ContentTags {
        systems: strings(&["renal", "metabolic"]),
        keywords: strings(&["purine", "xanthine oxidase", "uric acid"]),
        ..ContentTags::default()
    })
    .timestamps(CREATED, CREATED)
    .status(Status::Review)
}

fn eye_anatomy() -> EntryDraft {
    EntryDraft::new("eye-anatomy", ContentType::Structure, "Anatomy of the Eye")
        .name_es("Anatomía del ojo")
        .alternate_names(["Ocular anatomy", "Globe"])
        .level(
            LevelDraft::new(
                1,
                "The eye is a camera.",
                "Light passes through the clear front of the eye and is focused onto the back, where it is turned into signals the brain can read.",
            )
            .key_term("Pupil", "The dark opening that lets light into the eye")
            .analogies(["The lens is the camera lens and the retina is the film"]),
        )
        .level(
            LevelDraft::new(
                2,
                "Cornea and lens focus light on the retina.",
                "The cornea does most of the focusing and the lens fine-tunes it. The retina senses light, and the optic nerve carries the picture to the brain.",
            )
            .key_term("Retina", "Light-sensitive layer lining the back of the eye")
            .key_term("Lens", "Clear flexible structure that adjusts focus"),
        )
        .level(
            LevelDraft::new(
                3,
                "Three layers: fibrous coat, uvea and retina, with aqueous and vitreous.",
                "The sclera and cornea form the outer coat, the uvea (iris, ciliary body, choroid) the middle and the retina the inner layer. Aqueous humour made by the ciliary body drains through the trabecular meshwork.",
            )
            .key_term("Trabecular meshwork", "Drainage tissue in the angle between iris and cornea"),
        )
        .level(
            LevelDraft::new(
                4,
                "The macula and fovea hold the cone density for central acuity; the RPE supports photoreceptors.",
                "The fovea contains only cones and gives the sharpest acuity. The retinal pigment epithelium recycles visual pigment and phagocytoses outer segments; its failure underlies macular degeneration.",
            )
            .key_term("Fovea", "Central pit of the macula with the highest cone density"),
        )
        .level(
            LevelDraft::new(
                5,
                "Dual retinal blood supply and outflow physiology explain the patterns of ischaemic, glaucomatous and detachment injury.",
                "The inner retina is supplied by the central retinal artery and the outer retina by the choroid, so detachment starves photoreceptors. Outflow resistance at the juxtacanalicular meshwork sets intraocular pressure and drives glaucomatous axon loss at the lamina cribrosa.",
            )
            .key_term("Lamina cribrosa", "Sieve-like scleral plate through which optic nerve axons exit")
            .clinical_notes(["Macula-on detachments need same-day repair"]),
        )
        .cross_reference("cataracts", ContentType::Condition, Relationship::Child)
        .cross_reference("open-angle-glaucoma", ContentType::Condition, Relationship::Child)
        .cross_reference("amd", ContentType::Condition, Relationship::Child)
        .cross_reference("retinal-detachment", ContentType::Condition, Relationship::Child)
        .cross_reference_with(CrossReferenceDraft {
            target_id: "visual-pathway".into(),
            target_type: Some(ContentType::Pathway),
            relationship: Some(Relationship::SeeAlso),
            label: Some("From retina to visual cortex".into()),
        })
        .media(MediaDraft {
            id: "eye-cross-section".into(),
            kind: Some(MediaKind::Diagram),
            filename: "eye-cross-section.svg".into(),
            title: "Cross-section of the eye".into(),
            description: None,
        })
        .tags(ContentTags {
            systems: strings(&["ophthalmology"]),
            topics: strings(&["anatomy"]),
            keywords: strings(&["retina", "lens", "cornea", "macula"]),
            clinical_relevance: Some(ClinicalRelevance::Medium),
            exam_relevance: None,
        })
        .timestamps(CREATED, CREATED)
        .status(Status::Published)
}
