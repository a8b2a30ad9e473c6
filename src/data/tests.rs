//! Unit tests for loading and querying the statistics tables

use super::{loader::*, *};
use crate::{NflError, Position, Week, WeekScope};

const ROSTERS_CSV: &str = "\
season,team,position,depth_chart_position,full_name,status,week,game_type
2025,SEA,QB,QB,Sam Passer,ACT,7,REG
2025,SEA,QB,QB,Sam Passer,ACT,8,REG
2025,SEA,WR,WR,Wes Wideout,ACT,8,REG
2025,SEA,RB,RB,Ray Runner,ACT,8,REG
2025,SEA,TE,TE,Ty Tightend,ACT,8,REG
2025,SEA,WR,WR,Second Wideout,ACT,8,REG
2025,SEA,RB,RB,Injured Back,RES,8,REG
2025,SEA,OL,T,Big Tackle,ACT,8,REG
2025,SEA,FB,FB,Full Back,ACT,8,REG
2025,NE,QB,QB,Other Passer,ACT,8,REG
2025,SEA,QB,QB,Practice Squad,ACT,8,POST
";

fn roster_repo() -> StatRepository {
    let rosters = load_rosters_from_reader(ROSTERS_CSV.as_bytes()).unwrap();
    StatRepository::with_all_columns(rosters, vec![], vec![])
}

fn stat_repo(rows: Vec<PlayerStatRow>) -> StatRepository {
    StatRepository::with_all_columns(vec![], rows, vec![])
}

mod loader_tests {
    use super::*;

    #[test]
    fn test_load_rosters_ignores_extra_columns() {
        let rosters = load_rosters_from_reader(ROSTERS_CSV.as_bytes()).unwrap();
        assert_eq!(rosters.len(), 11);
        assert_eq!(rosters[0].team, "SEA");
        assert_eq!(rosters[0].week, Week::new(7));
        assert_eq!(rosters[0].game_type, GameType::Regular);
        assert_eq!(rosters[0].status, RosterStatus::Active);
        assert_eq!(rosters[6].status, RosterStatus::Other("RES".to_string()));
        assert_eq!(rosters[10].game_type, GameType::Other("POST".to_string()));
    }

    #[test]
    fn test_load_rosters_missing_column() {
        let csv = "team,week,game_type,status,position\nSEA,1,REG,ACT,QB\n";
        match load_rosters_from_reader(csv.as_bytes()).unwrap_err() {
            NflError::MissingColumn { table, column } => {
                assert_eq!(table, ROSTERS_FILE);
                assert_eq!(column, "full_name");
            }
            other => panic!("Expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rosters_skips_malformed_rows() {
        let csv = "team,week,game_type,status,position,full_name\n\
                   SEA,one,REG,ACT,QB,Bad Week\n\
                   SEA,2,REG,ACT,QB,Good Week\n";
        let rosters = load_rosters_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rosters.len(), 1);
        assert_eq!(rosters[0].full_name, "Good Week");
    }

    #[test]
    fn test_load_player_stats_nulls_and_schema() {
        let csv = "player_display_name,week,attempts,pacr,wopr,fantasy_points\n\
                   Sam Passer,NA,31,NA,,12.5\n\
                   Sam Passer,5.0,28,1.1,0.0,20.1\n";
        let (rows, columns) = load_player_stats_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].week, None);
        assert_eq!(rows[0].attempts, Some(31.0));
        assert_eq!(rows[0].pacr, None);
        assert_eq!(rows[0].wopr, None);
        assert_eq!(rows[1].week, Some(Week::new(5)));
        assert_eq!(rows[1].pacr, Some(1.1));

        assert!(columns.contains(PlayerStatColumn::Attempts));
        assert!(columns.contains(PlayerStatColumn::Wopr));
        assert!(!columns.contains(PlayerStatColumn::Carries));
    }

    #[test]
    fn test_load_player_stats_without_week_column() {
        let csv = "player_display_name,carries\nRay Runner,55\n";
        let (rows, _) = load_player_stats_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].week, None);
        assert_eq!(rows[0].carries, Some(55.0));
    }

    #[test]
    fn test_load_team_stats() {
        let csv = "team,season,def_epa_per_play\nSEA,2025,-0.05\nNE,2025,NA\n";
        let (rows, columns) = load_team_stats_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].def_epa_per_play, Some(-0.05));
        assert_eq!(rows[1].def_epa_per_play, None);
        assert!(columns.contains(TeamStatColumn::DefEpaPerPlay));
        assert!(!columns.contains(TeamStatColumn::SecondsPerPlay));
    }

    #[test]
    fn test_missing_columns_follow_header() {
        let csv = "player_display_name,attempts,completions,passing_yards,passing_epa,pacr,\
                   carries,rushing_yards,rushing_epa,receptions,receiving_yards\n";
        let (_, columns) = load_player_stats_from_reader(csv.as_bytes()).unwrap();
        let missing: Vec<PlayerStatColumn> = columns.missing().collect();
        assert_eq!(missing, vec![PlayerStatColumn::ReceivingEpa, PlayerStatColumn::Wopr]);

        let (_, team_columns) = load_team_stats_from_reader("team\n".as_bytes()).unwrap();
        assert_eq!(team_columns.missing().count(), TeamStatColumn::ALL.len());
        assert_eq!(ColumnSet::<TeamStatColumn>::all().missing().count(), 0);
    }

    #[test]
    fn test_load_from_readers_header_only_tables() {
        let repo = load_from_readers(
            "team,week,game_type,status,position,full_name\n".as_bytes(),
            "player_display_name\n".as_bytes(),
            "team\n".as_bytes(),
        )
        .unwrap();
        assert!(repo.rosters().is_empty());
        assert!(repo.player_stats().is_empty());
        assert!(repo.team_stats().is_empty());
    }

    #[test]
    fn test_load_from_readers_empty_input_fails() {
        let result = load_from_readers("".as_bytes(), "".as_bytes(), "".as_bytes());
        assert!(matches!(result, Err(NflError::MissingColumn { .. })));
    }
}

mod roster_tests {
    use super::*;

    #[test]
    fn test_get_skill_players_partitions_in_table_order() {
        let set = roster_repo().get_skill_players("SEA");
        assert_eq!(set.qbs, vec!["Sam Passer"]);
        assert_eq!(set.rbs, vec!["Ray Runner"]);
        assert_eq!(set.wrs, vec!["Wes Wideout", "Second Wideout"]);
        assert_eq!(set.tes, vec!["Ty Tightend"]);
    }

    #[test]
    fn test_get_skill_players_filters_status_and_game_type() {
        let set = roster_repo().get_skill_players("SEA");
        let all: Vec<&String> = Position::ALL.iter().flat_map(|p| set.players(*p)).collect();
        assert!(!all.iter().any(|n| n.as_str() == "Injured Back"));
        assert!(!all.iter().any(|n| n.as_str() == "Practice Squad"));
        assert!(!all.iter().any(|n| n.as_str() == "Big Tackle"));
        assert!(!all.iter().any(|n| n.as_str() == "Full Back"));
    }

    #[test]
    fn test_get_skill_players_empty_table() {
        let repo = StatRepository::with_all_columns(vec![], vec![], vec![]);
        let set = repo.get_skill_players("SEA");
        assert!(set.is_empty());
        assert_eq!(set, SkillPlayerSet::default());
    }

    #[test]
    fn test_get_skill_players_unknown_team() {
        assert!(roster_repo().get_skill_players("KC").is_empty());
    }

    #[test]
    fn test_latest_week_is_global() {
        // NE only has week 7 rows while the table reaches week 8
        let csv = "team,week,game_type,status,position,full_name\n\
                   SEA,8,REG,ACT,QB,Sam Passer\n\
                   NE,7,REG,ACT,QB,Other Passer\n";
        let rosters = load_rosters_from_reader(csv.as_bytes()).unwrap();
        let repo = StatRepository::with_all_columns(rosters, vec![], vec![]);

        assert_eq!(repo.latest_week("NE", WeekScope::Global), Some(Week::new(8)));
        assert!(repo.get_skill_players("NE").is_empty());

        assert_eq!(repo.latest_week("NE", WeekScope::Team), Some(Week::new(7)));
        let scoped = repo.get_skill_players_scoped("NE", WeekScope::Team);
        assert_eq!(scoped.qbs, vec!["Other Passer"]);
    }

    #[test]
    fn test_latest_week_ignores_eligibility() {
        // A week-9 postseason row still moves the global latest week
        let csv = "team,week,game_type,status,position,full_name\n\
                   SEA,8,REG,ACT,QB,Sam Passer\n\
                   SEA,9,POST,ACT,QB,Sam Passer\n";
        let rosters = load_rosters_from_reader(csv.as_bytes()).unwrap();
        let repo = StatRepository::with_all_columns(rosters, vec![], vec![]);
        assert!(repo.get_skill_players("SEA").is_empty());
    }
}

mod stat_tests {
    use super::*;
    use PlayerStatColumn::*;

    fn weekly(name: &str, week: u16, yards: f64) -> PlayerStatRow {
        PlayerStatRow::new(name, Some(Week::new(week))).with(PassingYards, yards)
    }

    #[test]
    fn test_get_player_stat_value_and_defaults() {
        let mut row = PlayerStatRow::new("Sam Passer", None).with(Attempts, 31.0);
        row.pacr = None;
        let repo = stat_repo(vec![row]);

        assert_eq!(repo.get_player_stat("Sam Passer", Attempts), 31.0);
        assert_eq!(repo.get_player_stat("Sam Passer", Pacr), 0.0);
        assert_eq!(repo.get_player_stat("Nobody", Attempts), 0.0);
    }

    #[test]
    fn test_lookup_player_stat_distinguishes_missing_cases() {
        let row = PlayerStatRow::new("Sam Passer", None).with(Attempts, 31.0);
        let repo = StatRepository::new(
            vec![],
            vec![row],
            ColumnSet::from_columns([Attempts, Pacr]),
            vec![],
            ColumnSet::all(),
        );

        assert_eq!(
            repo.lookup_player_stat("Sam Passer", "attempts"),
            StatLookup::Value(Some(31.0))
        );
        assert_eq!(
            repo.lookup_player_stat("Sam Passer", "pacr"),
            StatLookup::Value(None)
        );
        assert_eq!(
            repo.lookup_player_stat("Sam Passer", "carries"),
            StatLookup::MissingColumn
        );
        assert_eq!(
            repo.lookup_player_stat("Sam Passer", "fantasy_points"),
            StatLookup::UnknownColumn
        );
        assert_eq!(
            repo.lookup_player_stat("Nobody", "attempts"),
            StatLookup::NoRow
        );
        assert_eq!(repo.get_player_stat("Sam Passer", Carries), 0.0);
    }

    #[test]
    fn test_season_row_prefers_aggregate() {
        let repo = stat_repo(vec![
            weekly("Sam Passer", 1, 200.0),
            PlayerStatRow::new("Sam Passer", None).with(PassingYards, 1500.0),
            weekly("Sam Passer", 2, 250.0),
        ]);
        assert_eq!(repo.get_player_stat("Sam Passer", PassingYards), 1500.0);
    }

    #[test]
    fn test_season_row_outlives_player_name() {
        let repo = stat_repo(vec![PlayerStatRow::new("Sam Passer", None).with(Attempts, 31.0)]);
        let row = {
            let name = String::from("Sam Passer");
            repo.season_row(&name)
        };
        assert_eq!(row.and_then(|r| r.attempts), Some(31.0));
    }

    #[test]
    fn test_season_row_falls_back_to_first_row() {
        let repo = stat_repo(vec![
            weekly("Sam Passer", 3, 180.0),
            weekly("Sam Passer", 1, 200.0),
        ]);
        assert_eq!(repo.get_player_stat("Sam Passer", PassingYards), 180.0);
    }

    #[test]
    fn test_last3_total_skips_old_weeks() {
        let repo = stat_repo(vec![
            weekly("Sam Passer", 1, 300.0),
            weekly("Sam Passer", 5, 210.0),
            weekly("Sam Passer", 6, 190.0),
        ]);
        assert_eq!(repo.get_last3_total("Sam Passer", PassingYards), 400.0);
    }

    #[test]
    fn test_last3_total_full_window() {
        let repo = stat_repo(vec![
            weekly("Sam Passer", 3, 100.0),
            weekly("Sam Passer", 4, 200.0),
            weekly("Sam Passer", 5, 300.0),
            weekly("Sam Passer", 6, 400.0),
            weekly("Other Passer", 6, 999.0),
        ]);
        assert_eq!(repo.get_last3_total("Sam Passer", PassingYards), 900.0);
    }

    #[test]
    fn test_last3_total_nulls_count_as_zero() {
        let mut gap = weekly("Sam Passer", 5, 0.0);
        gap.passing_yards = None;
        let repo = stat_repo(vec![gap, weekly("Sam Passer", 6, 190.0)]);
        assert_eq!(repo.get_last3_total("Sam Passer", PassingYards), 190.0);
    }

    #[test]
    fn test_last3_total_early_season_window() {
        let repo = stat_repo(vec![weekly("Sam Passer", 1, 120.0), weekly("Sam Passer", 2, 80.0)]);
        assert_eq!(repo.get_last3_total("Sam Passer", PassingYards), 200.0);
    }

    #[test]
    fn test_last3_total_zero_cases() {
        let season_only =
            stat_repo(vec![PlayerStatRow::new("Sam Passer", None).with(PassingYards, 1500.0)]);
        assert_eq!(season_only.get_last3_total("Sam Passer", PassingYards), 0.0);

        let repo = stat_repo(vec![weekly("Sam Passer", 6, 190.0)]);
        assert_eq!(repo.get_last3_total("Nobody", PassingYards), 0.0);

        let no_column = StatRepository::new(
            vec![],
            vec![weekly("Sam Passer", 6, 190.0)],
            ColumnSet::all().without(PassingYards),
            vec![],
            ColumnSet::all(),
        );
        assert_eq!(no_column.get_last3_total("Sam Passer", PassingYards), 0.0);
    }

    #[test]
    fn test_league_mean() {
        let repo = StatRepository::with_all_columns(
            vec![],
            vec![],
            vec![
                TeamStatRow {
                    team: "SEA".to_string(),
                    def_epa_per_play: None,
                    seconds_per_play: Some(25.0),
                },
                TeamStatRow {
                    team: "NE".to_string(),
                    def_epa_per_play: None,
                    seconds_per_play: Some(30.0),
                },
            ],
        );
        assert_eq!(repo.league_mean(TeamStatColumn::SecondsPerPlay), Some(27.5));
        assert_eq!(repo.league_mean(TeamStatColumn::DefEpaPerPlay), None);
    }

    #[test]
    fn test_column_names_round_trip() {
        for &column in PlayerStatColumn::ALL {
            assert_eq!(column.as_str().parse::<PlayerStatColumn>().unwrap(), column);
        }
        for &column in TeamStatColumn::ALL {
            assert_eq!(column.to_string().parse::<TeamStatColumn>().unwrap(), column);
        }
        assert!("yards".parse::<PlayerStatColumn>().is_err());
    }
}
