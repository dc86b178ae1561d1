use serde_json::{Value, json};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.below(100) < percent
    }
}

fn logo_uri(team: &str) -> String {
    format!(
        "https://logos.example/{}.png",
        team.to_lowercase().replace(' ', "-")
    )
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let dates = [
        "2024-05-01",
        "2024-05-02",
        "2024-05-03",
        "2024-05-04",
        "2024-05-05",
        "2024-05-06",
        "2024-05-07",
    ];
    let times = ["FT", "HT", "90+2'", "19:45", "21:00"];

    let sports: Vec<(&str, &str, Vec<&str>, Vec<&str>)> = vec![
        (
            "football",
            "Football",
            vec!["Premier League", "La Liga", "Serie A", "Champions League"],
            vec![
                "Arsenal",
                "Chelsea",
                "Liverpool",
                "Manchester City",
                "Real Madrid",
                "Barcelona",
                "Juventus",
                "Inter",
                "Bayern Munich",
                "PSG",
            ],
        ),
        (
            "basketball",
            "Basketball",
            vec!["NBA", "EuroLeague"],
            vec![
                "Lakers",
                "Celtics",
                "Warriors",
                "Suns",
                "Bucks",
                "Panathinaikos",
            ],
        ),
        (
            "icehockey",
            "Ice Hockey",
            vec!["NHL"],
            vec![
                "Maple Leafs",
                "Bruins",
                "Rangers",
                "Panthers",
                "Oilers",
                "Avalanche",
            ],
        ),
        (
            "tennis",
            "Tennis",
            vec!["ATP Madrid", "Roland Garros"],
            vec!["Alcaraz", "Sinner", "Djokovic", "Zverev", "Swiatek", "Gauff"],
        ),
    ];

    let matches_per_sport = 8;
    let mut total_matches = 0usize;

    let mut sports_json: Vec<Value> = Vec::new();
    for (sport_id, sport_name, competitions, teams) in &sports {
        let mut matches: Vec<Value> = Vec::new();
        for n in 0..matches_per_sport {
            let home = rng.below(teams.len() as u64) as usize;
            let mut away = rng.below(teams.len() as u64) as usize;
            while away == home {
                away = rng.below(teams.len() as u64) as usize;
            }

            let time = times[rng.below(times.len() as u64) as usize];
            // Matches with a kickoff time have not started; show "-" scores.
            let upcoming = time.contains(':');
            let home_score = if upcoming { json!("-") } else { json!(rng.below(5)) };
            let away_score = if upcoming { json!("-") } else { json!(rng.below(5)) };

            matches.push(json!({
                "id": format!("{sport_id}-{n}"),
                "competition": competitions[rng.below(competitions.len() as u64) as usize],
                "date": dates[rng.below(dates.len() as u64) as usize],
                "time": time,
                "notification": rng.chance(25),
                "teams": [
                    { "name": teams[home], "score": home_score, "logo": logo_uri(teams[home]) },
                    { "name": teams[away], "score": away_score, "logo": logo_uri(teams[away]) },
                ],
            }));
            total_matches += 1;
        }

        sports_json.push(json!({
            "id": sport_id,
            "name": sport_name,
            "matches": matches,
        }));
    }

    let document = json!({ "sports": sports_json });

    let output_path = "sample_data.json";
    let text = serde_json::to_string_pretty(&document).expect("Failed to serialise dataset");
    std::fs::write(output_path, text).expect("Failed to write output file");

    println!(
        "Wrote {} matches across {} sports to {output_path}",
        total_matches,
        sports.len()
    );
}
