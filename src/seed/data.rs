//! Static seed tables: teams and the hand-checked trade trees

use crate::cli::types::AcquisitionType;

pub struct TeamSeed {
    pub abbr: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

pub struct PlayerSeed {
    pub name: &'static str,
    pub team: &'static str,
    /// `(year, round, pick)`
    pub draft: Option<(u16, u8, u16)>,
    pub headshot: Option<&'static str>,
}

/// A pick keyed like `draft_picks`: `(year, round, original team)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickKey {
    pub year: u16,
    pub round: u8,
    pub original: &'static str,
}

pub struct PickSeed {
    pub key: PickKey,
    pub number: Option<u16>,
    pub current: &'static str,
    pub player: Option<&'static str>,
}

pub enum AssetSeed {
    Player {
        name: &'static str,
        from: &'static str,
        to: &'static str,
    },
    Pick {
        key: PickKey,
        from: &'static str,
        to: &'static str,
    },
}

pub struct TradeSeed {
    /// Local handle used by acquisitions below
    pub key: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub source_url: Option<&'static str>,
    pub assets: &'static [AssetSeed],
}

pub struct AcquisitionSeed {
    pub player: &'static str,
    pub team: &'static str,
    pub kind: AcquisitionType,
    pub date: &'static str,
    pub trade: Option<&'static str>,
    pub origin: Option<&'static str>,
    pub pick: Option<PickKey>,
    pub notes: Option<&'static str>,
}

const fn pick(year: u16, original: &'static str) -> PickKey {
    PickKey {
        year,
        round: 1,
        original,
    }
}

const fn player(name: &'static str, from: &'static str, to: &'static str) -> AssetSeed {
    AssetSeed::Player { name, from, to }
}

const fn pick_asset(key: PickKey, from: &'static str, to: &'static str) -> AssetSeed {
    AssetSeed::Pick { key, from, to }
}

const fn roster(name: &'static str, team: &'static str) -> PlayerSeed {
    PlayerSeed {
        name,
        team,
        draft: None,
        headshot: None,
    }
}

const fn drafted(
    name: &'static str,
    team: &'static str,
    year: u16,
    number: u16,
    headshot: Option<&'static str>,
) -> PlayerSeed {
    PlayerSeed {
        name,
        team,
        draft: Some((year, 1, number)),
        headshot,
    }
}

pub const TEAMS: &[TeamSeed] = &[
    TeamSeed { abbr: "ATL", name: "Atlanta Hawks", primary: "#E03A3E", secondary: "#C1D32F" },
    TeamSeed { abbr: "BOS", name: "Boston Celtics", primary: "#007A33", secondary: "#BA9653" },
    TeamSeed { abbr: "BKN", name: "Brooklyn Nets", primary: "#000000", secondary: "#FFFFFF" },
    TeamSeed { abbr: "CHA", name: "Charlotte Hornets", primary: "#1D1160", secondary: "#00788C" },
    TeamSeed { abbr: "CHI", name: "Chicago Bulls", primary: "#CE1141", secondary: "#000000" },
    TeamSeed { abbr: "CLE", name: "Cleveland Cavaliers", primary: "#860038", secondary: "#041E42" },
    TeamSeed { abbr: "DAL", name: "Dallas Mavericks", primary: "#00538C", secondary: "#002B5E" },
    TeamSeed { abbr: "DEN", name: "Denver Nuggets", primary: "#0E2240", secondary: "#FEC524" },
    TeamSeed { abbr: "DET", name: "Detroit Pistons", primary: "#C8102E", secondary: "#1D42BA" },
    TeamSeed { abbr: "GSW", name: "Golden State Warriors", primary: "#1D428A", secondary: "#FFC72C" },
    TeamSeed { abbr: "HOU", name: "Houston Rockets", primary: "#CE1141", secondary: "#000000" },
    TeamSeed { abbr: "IND", name: "Indiana Pacers", primary: "#002D62", secondary: "#FDBB30" },
    TeamSeed { abbr: "LAC", name: "LA Clippers", primary: "#C8102E", secondary: "#1D428A" },
    TeamSeed { abbr: "LAL", name: "Los Angeles Lakers", primary: "#552583", secondary: "#FDB927" },
    TeamSeed { abbr: "MEM", name: "Memphis Grizzlies", primary: "#5D76A9", secondary: "#12173F" },
    TeamSeed { abbr: "MIA", name: "Miami Heat", primary: "#98002E", secondary: "#F9A01B" },
    TeamSeed { abbr: "MIL", name: "Milwaukee Bucks", primary: "#00471B", secondary: "#EEE1C6" },
    TeamSeed { abbr: "MIN", name: "Minnesota Timberwolves", primary: "#0C2340", secondary: "#236192" },
    TeamSeed { abbr: "NOP", name: "New Orleans Pelicans", primary: "#0C2340", secondary: "#C8102E" },
    TeamSeed { abbr: "NYK", name: "New York Knicks", primary: "#006BB6", secondary: "#F58426" },
    TeamSeed { abbr: "OKC", name: "Oklahoma City Thunder", primary: "#007AC1", secondary: "#EF3B24" },
    TeamSeed { abbr: "ORL", name: "Orlando Magic", primary: "#0077C0", secondary: "#C4CED4" },
    TeamSeed { abbr: "PHI", name: "Philadelphia 76ers", primary: "#006BB6", secondary: "#ED174C" },
    TeamSeed { abbr: "PHX", name: "Phoenix Suns", primary: "#1D1160", secondary: "#E56020" },
    TeamSeed { abbr: "POR", name: "Portland Trail Blazers", primary: "#E03A3E", secondary: "#000000" },
    TeamSeed { abbr: "SAC", name: "Sacramento Kings", primary: "#5A2D81", secondary: "#63727A" },
    TeamSeed { abbr: "SAS", name: "San Antonio Spurs", primary: "#C4CED4", secondary: "#000000" },
    TeamSeed { abbr: "TOR", name: "Toronto Raptors", primary: "#CE1141", secondary: "#000000" },
    TeamSeed { abbr: "UTA", name: "Utah Jazz", primary: "#002B5C", secondary: "#00471B" },
    TeamSeed { abbr: "WAS", name: "Washington Wizards", primary: "#002B5C", secondary: "#E31837" },
];

const HEADSHOT_TATUM: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760/1628369.png";
const HEADSHOT_BROWN: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760/1627759.png";
const HEADSHOT_WHITE: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760/1628401.png";
const HEADSHOT_GARNETT: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760/708.png";
const HEADSHOT_PIERCE: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760/1718.png";
const HEADSHOT_HARDEN: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760/201935.png";

/// Teams are as of the acquisition recorded for each player
pub const PLAYERS: &[PlayerSeed] = &[
    // Celtics-Nets tree
    drafted("Jayson Tatum", "BOS", 2017, 3, Some(HEADSHOT_TATUM)),
    drafted("Jaylen Brown", "BOS", 2016, 3, Some(HEADSHOT_BROWN)),
    drafted("Derrick White", "BOS", 2017, 29, Some(HEADSHOT_WHITE)),
    drafted("Kevin Garnett", "BKN", 1995, 5, Some(HEADSHOT_GARNETT)),
    drafted("Paul Pierce", "BKN", 1998, 10, Some(HEADSHOT_PIERCE)),
    roster("Jason Terry", "BKN"),
    roster("D.J. White", "BKN"),
    roster("Gerald Wallace", "BOS"),
    roster("Kris Humphries", "BOS"),
    roster("MarShon Brooks", "BOS"),
    roster("Kris Joseph", "BOS"),
    roster("Keith Bogans", "BOS"),
    drafted("James Young", "BOS", 2014, 17, None),
    drafted("Markelle Fultz", "PHI", 2017, 1, None),
    drafted("Kyrie Irving", "BOS", 2011, 1, None),
    roster("Isaiah Thomas", "CLE"),
    roster("Jae Crowder", "CLE"),
    drafted("Collin Sexton", "CLE", 2018, 8, None),
    // Harden tree
    drafted("James Harden", "HOU", 2009, 3, Some(HEADSHOT_HARDEN)),
    roster("Kevin Martin", "OKC"),
    roster("Jeremy Lamb", "OKC"),
    roster("Kyle Lowry", "TOR"),
    roster("Gary Forbes", "HOU"),
    drafted("Steven Adams", "OKC", 2013, 12, None),
    // Luka/Trae draft-night swap
    drafted("Luka Dončić", "DAL", 2018, 3, None),
    drafted("Trae Young", "ATL", 2018, 5, None),
    drafted("Cam Reddish", "ATL", 2019, 10, None),
];

const BKN_2014: PickKey = pick(2014, "BKN");
const BKN_2016: PickKey = pick(2016, "BKN");
const BKN_2017: PickKey = pick(2017, "BKN");
const BKN_2018: PickKey = pick(2018, "BKN");
const PHI_2017: PickKey = pick(2017, "PHI");
const TOR_2013: PickKey = pick(2013, "TOR");
const DAL_2019: PickKey = pick(2019, "DAL");

pub const PICKS: &[PickSeed] = &[
    PickSeed { key: BKN_2014, number: Some(17), current: "BOS", player: Some("James Young") },
    PickSeed { key: BKN_2016, number: Some(3), current: "BOS", player: Some("Jaylen Brown") },
    PickSeed { key: BKN_2017, number: Some(1), current: "PHI", player: Some("Markelle Fultz") },
    PickSeed { key: BKN_2018, number: Some(8), current: "CLE", player: Some("Collin Sexton") },
    PickSeed { key: PHI_2017, number: Some(3), current: "BOS", player: Some("Jayson Tatum") },
    PickSeed { key: TOR_2013, number: Some(12), current: "OKC", player: Some("Steven Adams") },
    PickSeed { key: DAL_2019, number: Some(10), current: "ATL", player: Some("Cam Reddish") },
];

pub const CELTICS_NETS: &str = "celtics-nets-2013";
pub const FULTZ_SWAP: &str = "celtics-sixers-2017";
pub const KYRIE_TRADE: &str = "celtics-cavaliers-2017";
pub const LOWRY_TRADE: &str = "raptors-rockets-2012";
pub const HARDEN_TRADE: &str = "thunder-rockets-2012";
pub const LUKA_TRAE_SWAP: &str = "mavericks-hawks-2018";

/// Trades in date order
pub const TRADES: &[TradeSeed] = &[
    TradeSeed {
        key: LOWRY_TRADE,
        date: "2012-07-11",
        description: "Rockets trade Kyle Lowry to Raptors for Gary Forbes and a future 1st",
        source_url: Some("https://www.basketball-reference.com/teams/TOR/2013_transactions.html"),
        assets: &[
            player("Kyle Lowry", "HOU", "TOR"),
            player("Gary Forbes", "TOR", "HOU"),
            pick_asset(TOR_2013, "TOR", "HOU"),
        ],
    },
    TradeSeed {
        key: HARDEN_TRADE,
        date: "2012-10-27",
        description: "Thunder trade James Harden to Rockets for Kevin Martin, Jeremy Lamb and picks",
        source_url: Some("https://www.basketball-reference.com/teams/OKC/2013_transactions.html"),
        assets: &[
            player("James Harden", "OKC", "HOU"),
            player("Kevin Martin", "HOU", "OKC"),
            player("Jeremy Lamb", "HOU", "OKC"),
            pick_asset(TOR_2013, "HOU", "OKC"),
        ],
    },
    TradeSeed {
        key: CELTICS_NETS,
        date: "2013-06-27",
        description: "Celtics trade Kevin Garnett and Paul Pierce to Nets for future picks",
        source_url: Some("https://www.basketball-reference.com/teams/BOS/2014_transactions.html"),
        assets: &[
            pick_asset(BKN_2014, "BKN", "BOS"),
            pick_asset(BKN_2016, "BKN", "BOS"),
            pick_asset(BKN_2017, "BKN", "BOS"),
            pick_asset(BKN_2018, "BKN", "BOS"),
            player("Gerald Wallace", "BKN", "BOS"),
            player("Kris Humphries", "BKN", "BOS"),
            player("MarShon Brooks", "BKN", "BOS"),
            player("Kris Joseph", "BKN", "BOS"),
            player("Keith Bogans", "BKN", "BOS"),
            player("Kevin Garnett", "BOS", "BKN"),
            player("Paul Pierce", "BOS", "BKN"),
            player("Jason Terry", "BOS", "BKN"),
            player("D.J. White", "BOS", "BKN"),
        ],
    },
    TradeSeed {
        key: FULTZ_SWAP,
        date: "2017-06-19",
        description: "Celtics trade #1 pick to 76ers for #3 pick and future 1st",
        source_url: Some("https://www.basketball-reference.com/teams/BOS/2018_transactions.html"),
        assets: &[
            pick_asset(BKN_2017, "BOS", "PHI"),
            pick_asset(PHI_2017, "PHI", "BOS"),
        ],
    },
    TradeSeed {
        key: KYRIE_TRADE,
        date: "2017-08-22",
        description: "Cavaliers trade Kyrie Irving to Celtics for Isaiah Thomas, Jae Crowder and the 2018 Nets 1st",
        source_url: Some("https://www.basketball-reference.com/teams/BOS/2018_transactions.html"),
        assets: &[
            player("Kyrie Irving", "CLE", "BOS"),
            player("Isaiah Thomas", "BOS", "CLE"),
            player("Jae Crowder", "BOS", "CLE"),
            pick_asset(BKN_2018, "BOS", "CLE"),
        ],
    },
    TradeSeed {
        key: LUKA_TRAE_SWAP,
        date: "2018-06-21",
        description: "Mavericks trade Trae Young and a 2019 1st to Hawks for Luka Dončić",
        source_url: Some("https://www.basketball-reference.com/teams/DAL/2019_transactions.html"),
        assets: &[
            player("Luka Dončić", "ATL", "DAL"),
            player("Trae Young", "DAL", "ATL"),
            pick_asset(DAL_2019, "DAL", "ATL"),
        ],
    },
];

const fn draft_via(
    player: &'static str,
    team: &'static str,
    date: &'static str,
    trade: &'static str,
    origin: &'static str,
    pick: PickKey,
) -> AcquisitionSeed {
    AcquisitionSeed {
        player,
        team,
        kind: AcquisitionType::Draft,
        date,
        trade: Some(trade),
        origin: Some(origin),
        pick: Some(pick),
        notes: None,
    }
}

const fn traded(
    player: &'static str,
    team: &'static str,
    date: &'static str,
    trade: Option<&'static str>,
    origin: Option<&'static str>,
) -> AcquisitionSeed {
    AcquisitionSeed {
        player,
        team,
        kind: AcquisitionType::Trade,
        date,
        trade,
        origin,
        pick: None,
        notes: None,
    }
}

pub const ACQUISITIONS: &[AcquisitionSeed] = &[
    draft_via("Jayson Tatum", "BOS", "2017-06-22", FULTZ_SWAP, CELTICS_NETS, PHI_2017),
    draft_via("Jaylen Brown", "BOS", "2016-06-23", CELTICS_NETS, CELTICS_NETS, BKN_2016),
    draft_via("James Young", "BOS", "2014-06-26", CELTICS_NETS, CELTICS_NETS, BKN_2014),
    draft_via("Markelle Fultz", "PHI", "2017-06-22", FULTZ_SWAP, CELTICS_NETS, BKN_2017),
    draft_via("Collin Sexton", "CLE", "2018-06-21", KYRIE_TRADE, CELTICS_NETS, BKN_2018),
    traded("Kevin Garnett", "BKN", "2013-06-27", Some(CELTICS_NETS), Some(CELTICS_NETS)),
    traded("Paul Pierce", "BKN", "2013-06-27", Some(CELTICS_NETS), Some(CELTICS_NETS)),
    traded("Kyrie Irving", "BOS", "2017-08-22", Some(KYRIE_TRADE), Some(KYRIE_TRADE)),
    AcquisitionSeed {
        notes: Some("Acquired from San Antonio; trade not tracked"),
        ..traded("Derrick White", "BOS", "2022-02-10", None, None)
    },
    traded("James Harden", "HOU", "2012-10-27", Some(HARDEN_TRADE), Some(HARDEN_TRADE)),
    draft_via("Steven Adams", "OKC", "2013-06-27", HARDEN_TRADE, HARDEN_TRADE, TOR_2013),
    traded("Luka Dončić", "DAL", "2018-06-21", Some(LUKA_TRAE_SWAP), Some(LUKA_TRAE_SWAP)),
    traded("Trae Young", "ATL", "2018-06-21", Some(LUKA_TRAE_SWAP), None),
    draft_via("Cam Reddish", "ATL", "2019-06-20", LUKA_TRAE_SWAP, LUKA_TRAE_SWAP, DAL_2019),
];
