//! Built-in furniture vocabulary.
//!
//! Roots are written in their display form; synonyms cover Hungarian
//! variants, English shop terms and common spellings without accents. Every
//! root appears in exactly one category.

use super::category::Category;

pub(crate) const BUILTIN_SYNONYMS: &[(&str, Category, &[&str])] = &[
    // Product types
    (
        "kanapé",
        Category::ProductType,
        &[
            "szófa",
            "sofa",
            "couch",
            "heverő",
            "dívány",
            "ülőgarnitúra",
            "sarokkanapé",
            "kanapéágy",
            "kinyitható kanapé",
        ],
    ),
    (
        "fotel",
        Category::ProductType,
        &["karosszék", "armchair", "relaxfotel", "pihenőfotel", "füles fotel"],
    ),
    (
        "szék",
        Category::ProductType,
        &["chair", "étkezőszék", "forgószék", "bárszék", "hokedli", "stool"],
    ),
    (
        "asztal",
        Category::ProductType,
        &["table", "étkezőasztal", "konyhaasztal", "bővíthető asztal"],
    ),
    (
        "dohányzóasztal",
        Category::ProductType,
        &["kisasztal", "coffee table", "lerakóasztal", "tálalóasztal"],
    ),
    (
        "íróasztal",
        Category::ProductType,
        &["desk", "számítógépasztal", "gamer asztal", "tanulóasztal"],
    ),
    (
        "szekrény",
        Category::ProductType,
        &["cabinet", "wardrobe", "gardrób", "ruhásszekrény", "tálaló", "vitrin"],
    ),
    (
        "tv-szekrény",
        Category::ProductType,
        &["tv állvány", "tv pad", "médiabútor", "tévészekrény", "tv stand"],
    ),
    (
        "komód",
        Category::ProductType,
        &["dresser", "fiókos szekrény", "chest of drawers", "sublót"],
    ),
    (
        "éjjeliszekrény",
        Category::ProductType,
        &["éjjeli szekrény", "nightstand", "bedside table"],
    ),
    (
        "cipősszekrény",
        Category::ProductType,
        &["cipőtartó", "shoe cabinet", "cipős szekrény"],
    ),
    (
        "ágy",
        Category::ProductType,
        &["bed", "franciaágy", "boxspring", "ágykeret", "emeletes ágy"],
    ),
    ("matrac", Category::ProductType, &["mattress", "fedőmatrac"]),
    (
        "polc",
        Category::ProductType,
        &["shelf", "könyvespolc", "bookcase", "falipolc", "regál"],
    ),
    (
        "lámpa",
        Category::ProductType,
        &[
            "lamp",
            "állólámpa",
            "asztali lámpa",
            "csillár",
            "világítás",
            "light",
            "mennyezeti lámpa",
        ],
    ),
    (
        "szőnyeg",
        Category::ProductType,
        &["rug", "carpet", "futószőnyeg", "kilim"],
    ),
    ("tükör", Category::ProductType, &["mirror", "falitükör"]),
    (
        "párna",
        Category::ProductType,
        &["cushion", "díszpárna", "pillow", "kispárna"],
    ),
    (
        "függöny",
        Category::ProductType,
        &["curtain", "sötétítő", "drapéria", "fényáteresztő függöny"],
    ),
    (
        "puff",
        Category::ProductType,
        &["pouf", "ülőpuff", "lábtartó", "ottoman"],
    ),
    ("pad", Category::ProductType, &["bench", "ülőpad"]),
    // Colors
    (
        "fehér",
        Category::Color,
        &["white", "hófehér", "törtfehér"],
    ),
    ("fekete", Category::Color, &["black", "ében"]),
    (
        "szürke",
        Category::Color,
        &["grey", "gray", "antracit", "grafit", "világosszürke", "sötétszürke"],
    ),
    (
        "bézs",
        Category::Color,
        &["beige", "drapp", "homok", "homokszín", "krém", "cream", "ekrü", "taupe"],
    ),
    (
        "barna",
        Category::Color,
        &["brown", "mogyoró", "csokoládé", "konyak", "kávébarna"],
    ),
    (
        "kék",
        Category::Color,
        &["blue", "navy", "sötétkék", "tengerészkék", "türkiz", "petrol"],
    ),
    (
        "zöld",
        Category::Color,
        &["green", "olíva", "olívazöld", "smaragd", "zsálya", "sage"],
    ),
    (
        "piros",
        Category::Color,
        &["red", "vörös", "bordó", "burgundi", "terrakotta"],
    ),
    (
        "sárga",
        Category::Color,
        &["yellow", "mustár", "mustársárga", "okker"],
    ),
    (
        "rózsaszín",
        Category::Color,
        &["pink", "púder", "púderrózsaszín", "mályva"],
    ),
    ("arany", Category::Color, &["gold", "golden", "aranyszínű"]),
    ("natúr", Category::Color, &["natural", "naturál"]),
    // Styles
    (
        "modern",
        Category::Style,
        &["kortárs", "contemporary", "trendi"],
    ),
    (
        "skandináv",
        Category::Style,
        &["scandinavian", "skandi", "scandi", "nordic", "északi"],
    ),
    (
        "vintage",
        Category::Style,
        &["retro", "régies", "antik", "antique", "mid century"],
    ),
    (
        "ipari",
        Category::Style,
        &["industrial", "loft", "indusztriális"],
    ),
    (
        "klasszikus",
        Category::Style,
        &["classic", "elegáns", "barokk", "chesterfield"],
    ),
    (
        "rusztikus",
        Category::Style,
        &["rustic", "vidéki", "country", "provence", "parasztos"],
    ),
    (
        "minimalista",
        Category::Style,
        &["minimal", "minimalist", "letisztult", "puritán"],
    ),
    ("boho", Category::Style, &["bohém", "bohemian", "etno"]),
    // Materials
    (
        "fa",
        Category::Material,
        &[
            "tömörfa", "wood", "wooden", "fából", "tölgy", "oak", "bükk", "fenyő", "dió", "akác",
            "walnut",
        ],
    ),
    (
        "fém",
        Category::Material,
        &["metal", "acél", "steel", "vas", "iron", "alumínium", "króm", "chrome"],
    ),
    (
        "bőr",
        Category::Material,
        &["leather", "valódi bőr", "nubuk", "marhabőr"],
    ),
    (
        "műbőr",
        Category::Material,
        &["faux leather", "ökobőr", "textilbőr", "pu bőr"],
    ),
    (
        "bársony",
        Category::Material,
        &["velvet", "velúr", "plüss", "plush", "kordbársony"],
    ),
    (
        "szövet",
        Category::Material,
        &[
            "textil", "fabric", "kárpit", "kárpitozott", "len", "linen", "pamut", "cotton",
            "bouclé", "buklé",
        ],
    ),
    ("üveg", Category::Material, &["glass", "edzett üveg"]),
    (
        "rattan",
        Category::Material,
        &["ratan", "fonott", "vessző", "wicker", "bambusz"],
    ),
    ("márvány", Category::Material, &["marble", "márványhatású"]),
    (
        "műanyag",
        Category::Material,
        &["plastic", "polipropilén", "akril"],
    ),
    // Rooms
    (
        "nappali",
        Category::Room,
        &["living room", "lounge", "társalgó", "living"],
    ),
    ("hálószoba", Category::Room, &["háló", "bedroom"]),
    ("étkező", Category::Room, &["ebédlő", "dining", "dining room"]),
    (
        "iroda",
        Category::Room,
        &["irodai", "office", "dolgozószoba", "home office"],
    ),
    ("konyha", Category::Room, &["kitchen", "konyhai"]),
    (
        "fürdőszoba",
        Category::Room,
        &["fürdő", "bathroom", "fürdőszobai"],
    ),
    (
        "gyerekszoba",
        Category::Room,
        &["gyerek", "gyermekszoba", "kids", "children"],
    ),
    (
        "előszoba",
        Category::Room,
        &["hall", "hallway", "folyosó", "bejárat"],
    ),
    (
        "kert",
        Category::Room,
        &["garden", "terasz", "erkély", "balkon", "outdoor", "kültéri"],
    ),
    // Sale modifiers
    (
        "akciós",
        Category::Sale,
        &[
            "akció",
            "olcsó",
            "leárazás",
            "leárazott",
            "kedvezmény",
            "kedvezményes",
            "kiárusítás",
            "sale",
            "discount",
            "cheap",
            "outlet",
            "féláron",
        ],
    ),
];
