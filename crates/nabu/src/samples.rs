use crate::models::BirdRecord;

/// The bundled sample set: ten common German garden birds.
///
/// Crawling every NABU portrait page is out of scope; the seeder inserts
/// these fixed records instead.
pub fn sample_birds() -> Vec<BirdRecord> {
    let records = [
        (
            "Rotkehlchen",
            "Erithacus rubecula",
            "Das Rotkehlchen ist dank der orangeroten Brust und Kehle leicht zu erkennen. Es ist einer der beliebtesten Singvögel in Deutschland und sehr zutraulich.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/schnaepperverwandte/rotkehlchen/190712-nabu-rotkehlchen-uwe-hennig.jpeg",
        ),
        (
            "Amsel",
            "Turdus merula",
            "Die Amsel ist einer der häufigsten Vögel in Deutschland. Männchen sind schwarz mit gelbem Schnabel, Weibchen braun.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/drosseln/amsel/190712-nabu-amsel-frank-derer.jpeg",
        ),
        (
            "Blaumeise",
            "Cyanistes caeruleus",
            "Die Blaumeise ist mit ihrer blau-gelben Färbung sehr auffällig und ein häufiger Gast an Futterstellen.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/meisen/blaumeise/190712-nabu-blaumeise-frank-derer.jpeg",
        ),
        (
            "Kohlmeise",
            "Parus major",
            "Die Kohlmeise ist die größte heimische Meisenart. Sie hat einen schwarzen Kopf mit weißen Wangen.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/meisen/kohlmeise/190712-nabu-kohlmeise-frank-derer.jpeg",
        ),
        (
            "Haussperling",
            "Passer domesticus",
            "Der Haussperling, auch Spatz genannt, lebt in unmittelbarer Nähe zum Menschen und ist sehr gesellig.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/sperlinge/haussperling/190712-nabu-haussperling-frank-derer.jpeg",
        ),
        (
            "Star",
            "Sturnus vulgaris",
            "Der Star ist ein begabter Sänger und kann andere Vogelstimmen imitieren. Im Prachtkleid glänzt sein Gefieder metallisch.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/stare/star/190712-nabu-star-frank-derer.jpeg",
        ),
        (
            "Buchfink",
            "Fringilla coelebs",
            "Der Buchfink ist einer der häufigsten Brutvögel in Deutschland. Männchen haben eine rosarote Brust.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/finken/buchfink/190712-nabu-buchfink-frank-derer.jpeg",
        ),
        (
            "Grünfink",
            "Chloris chloris",
            "Der Grünfink hat ein olivgrünes Gefieder und ist an Futterstellen häufig zu sehen.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/finken/gruenfink/190712-nabu-gruenfink-frank-derer.jpeg",
        ),
        (
            "Elster",
            "Pica pica",
            "Die Elster ist durch ihr schwarz-weißes Gefieder und den langen Schwanz unverwechselbar.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/rabenverwandte/elster/190712-nabu-elster-frank-derer.jpeg",
        ),
        (
            "Eichelhäher",
            "Garrulus glandarius",
            "Der Eichelhäher ist für seine blauen Flügelfedern bekannt und spielt eine wichtige Rolle bei der Verbreitung von Eicheln.",
            "https://www.nabu.de/imperia/md/nabu/images/arten/tiere/voegel/rabenverwandte/eichelhaher/190712-nabu-eichelhaher-frank-derer.jpeg",
        ),
    ];

    records
        .into_iter()
        .map(|(name, scientific_name, description, image_url)| BirdRecord {
            name: name.to_string(),
            scientific_name: scientific_name.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_birds() {
        let birds = sample_birds();
        assert_eq!(birds.len(), 10);
        assert_eq!(birds[0].name, "Rotkehlchen");
        assert!(birds.iter().all(|b| !b.image_url.is_empty()));
    }
}
