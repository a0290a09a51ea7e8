//! Constants for the Ensembl REST client.

/// Environment variable overriding the Ensembl REST endpoint.
pub const ENSEMBL_API_ENV: &str = "PROVAR_ENSEMBL_URL";

/// Default Ensembl REST endpoint.
pub const DEFAULT_ENSEMBL_API: &str = "https://rest.ensembl.org";

/// Species with variation data in Ensembl, in UniProt `OS=` notation
/// (lowercased, underscore-joined). Variants are only fetched for these.
pub const ENSEMBL_SPECIES: &[&str] = &[
    "anolis_carolinensis",
    "bos_taurus",
    "caenorhabditis_elegans",
    "callithrix_jacchus",
    "canis_familiaris",
    "canis_lupus",
    "ciona_intestinalis",
    "danio_rerio",
    "drosophila_melanogaster",
    "equus_caballus",
    "felis_catus",
    "gallus_gallus",
    "gasterosteus_aculeatus",
    "gorilla_gorilla",
    "homo_sapiens",
    "macaca_mulatta",
    "meleagris_gallopavo",
    "monodelphis_domestica",
    "mus_musculus",
    "ornithorhynchus_anatinus",
    "oryctolagus_cuniculus",
    "oryzias_latipes",
    "ovis_aries",
    "pan_troglodytes",
    "pongo_abelii",
    "rattus_norvegicus",
    "saccharomyces_cerevisiae",
    "sus_scrofa",
    "taeniopygia_guttata",
    "takifugu_rubripes",
    "tetraodon_nigroviridis",
    "xenopus_tropicalis",
];

/// True when Ensembl carries variation data for the species.
pub fn is_supported_species(species: &str) -> bool {
    ENSEMBL_SPECIES.contains(&species)
}
