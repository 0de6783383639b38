//! Short port codes as they appear in AIS destination fields.

const PORT_CODES: &[(&str, &str)] = &[
    ("GBSOU", "Southampton"),
    ("SOU", "Southampton"),
    ("GBPME", "Portsmouth"),
    ("GBDVR", "Dover"),
    ("DVR", "Dover"),
    ("GBPLY", "Plymouth"),
    ("GBFAL", "Falmouth"),
    ("GBLIV", "Liverpool"),
    ("GBBEL", "Belfast"),
    ("GBGRK", "Greenock"),
    ("GBLON", "London"),
    ("GBTIL", "Tilbury"),
    ("IEDUB", "Dublin"),
    ("IEORK", "Cork"),
    ("FRCER", "Cherbourg"),
    ("FRHON", "Honfleur"),
    ("FRBOD", "Bordeaux"),
    ("FRMRS", "Marseille"),
    ("ESBIO", "Bilbao"),
    ("ESLCG", "A Coruna"),
    ("ESVGO", "Vigo"),
    ("ESCAD", "Cadiz"),
    ("ESMLG", "Malaga"),
    ("ESBCN", "Barcelona"),
    ("ESPMI", "Palma de Mallorca"),
    ("ESLPA", "Las Palmas"),
    ("ESSCT", "Santa Cruz de Tenerife"),
    ("ESACE", "Arrecife"),
    ("PTLIS", "Lisbon"),
    ("PTLEI", "Leixoes"),
    ("PTFNC", "Funchal"),
    ("GIGIB", "Gibraltar"),
    ("GIB", "Gibraltar"),
    ("ITCVV", "Civitavecchia"),
    ("ITNAP", "Naples"),
    ("ITGOA", "Genoa"),
    ("ITVCE", "Venice"),
    ("MTMLA", "Valletta"),
    ("GRPIR", "Piraeus"),
    ("HRDBV", "Dubrovnik"),
    ("NLAMS", "Amsterdam"),
    ("NLRTM", "Rotterdam"),
    ("BEZEE", "Zeebrugge"),
    ("DEHAM", "Hamburg"),
    ("DKCPH", "Copenhagen"),
    ("NOBGO", "Bergen"),
    ("NOOSL", "Oslo"),
    ("SESTO", "Stockholm"),
    ("ISREY", "Reykjavik"),
];

fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Human-readable name for a known code, or the input unchanged.
pub fn translate(value: &str) -> String {
    let key = normalize(value);
    PORT_CODES
        .iter()
        .find(|(code, _)| *code == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| value.to_string())
}
