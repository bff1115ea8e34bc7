pub fn run(notation: &str, name: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut rng = super::make_rng(seed);

    if json {
        let results = kb_dice::evaluate(notation, &mut rng).map_err(|e| e.to_string())?;
        let out = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let reply = kb_dice::roll_request(name, notation, &mut rng).map_err(|e| e.to_string())?;
    println!("{reply}");
    Ok(())
}
