use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Timelike, Weekday,
};

/// Combine `"Mon Jan 02"` + année + `"HH:MM"` en instant absolu dans `tz`.
///
/// Le jour de semaine est vérifié syntaxiquement mais pas confronté à la date :
/// un export à cheval sur deux années reste lisible.
pub(super) fn resolve<Tz: TimeZone>(
    date: &str,
    time: &str,
    year: i32,
    tz: &Tz,
) -> Result<DateTime<FixedOffset>, String> {
    let (weekday, month_day) = date
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("expected `Day Mon DD`, got `{date}`"))?;
    weekday
        .parse::<Weekday>()
        .map_err(|_| format!("invalid weekday `{weekday}`"))?;

    let day = NaiveDate::parse_from_str(&format!("{} {year}", month_day.trim()), "%b %d %Y")
        .map_err(|e| format!("invalid date `{date}`: {e}"))?;
    let clock = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|e| format!("invalid time `{time}`: {e}"))?;

    let local = day.and_time(clock);
    let resolved = tz
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| format!("local time {local} does not exist in this timezone"))?;
    Ok(resolved.with_timezone(&resolved.offset().fix()))
}

/// Passage de minuit : une fin dont l'heure précède celle du début est
/// repoussée de 24h. Suppose qu'aucun shift ne dépasse 24h.
pub(super) fn roll_overnight(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> DateTime<FixedOffset> {
    if end.hour() < start.hour() {
        end + Duration::hours(24)
    } else {
        end
    }
}
