use crate::error::EditError;
use crate::model::{Metro, Network, Route};
use crate::parse;

/// Raw metro fields as taken from the command line, before coercion.
#[derive(Debug, Clone, Copy)]
pub struct MetroFields<'a> {
    pub code: &'a str,
    pub continent: &'a str,
    pub coordinates: &'a str,
    pub country: &'a str,
    pub name: &'a str,
    pub population: &'a str,
    pub region: &'a str,
    pub timezone: &'a str,
}

/// Set one field of the metro named `city` to the coerced `value`.
///
/// An unknown city and an unknown element are both silent no-ops; only a
/// value that fails coercion is an error.
pub fn modify_metro(
    net: &mut Network,
    city: &str,
    element: &str,
    value: &str,
) -> Result<(), EditError> {
    let Some(metro) = net.metro_by_name_mut(city) else {
        return Ok(());
    };
    match element {
        "code" => metro.code = parse::desnake(value),
        "name" => metro.name = parse::desnake(value),
        "country" => metro.country = parse::desnake(value),
        "continent" => metro.continent = parse::desnake(value),
        "population" => metro.population = parse::integer("population", value)?,
        "region" => metro.region = parse::integer("region", value)?,
        "timezone" => metro.timezone = parse::float("timezone", value)?,
        "coordinates" => metro.coordinates = parse::coordinates(value)?,
        _ => {}
    }
    Ok(())
}

/// Append a route `SRC-DST` with the given distance.
pub fn add_route(net: &mut Network, distance: &str, route: &str) -> Result<(), EditError> {
    let (src, dst) = parse::route_pair(route)?;
    let distance = parse::integer("distance", distance)?;
    net.routes.push(Route {
        distance,
        ports: [src, dst],
    });
    Ok(())
}

/// Build a metro from its raw fields and append it.
pub fn add_metro(net: &mut Network, fields: &MetroFields<'_>) -> Result<(), EditError> {
    let metro = Metro {
        code: parse::desnake(fields.code),
        continent: parse::desnake(fields.continent),
        coordinates: parse::coordinates(fields.coordinates)?,
        country: parse::desnake(fields.country),
        name: parse::desnake(fields.name),
        population: parse::integer("population", fields.population)?,
        region: parse::integer("region", fields.region)?,
        timezone: parse::float("timezone", fields.timezone)?,
    };
    net.metros.push(metro);
    Ok(())
}

/// Remove the first metro named `city`; error if none matches.
pub fn remove_metro(net: &mut Network, city: &str) -> Result<(), EditError> {
    match net.metros.iter().position(|m| m.name == city) {
        Some(idx) => {
            net.metros.remove(idx);
            Ok(())
        }
        None => Err(EditError::MetroNotFound(city.to_string())),
    }
}

/// Remove the first route whose ordered endpoint pair matches `SRC-DST`;
/// error if none matches.
pub fn remove_route(net: &mut Network, route: &str) -> Result<(), EditError> {
    let (src, dst) = parse::route_pair(route)?;
    match net
        .routes
        .iter()
        .position(|r| r.ports[0] == src && r.ports[1] == dst)
    {
        Some(idx) => {
            net.routes.remove(idx);
            Ok(())
        }
        None => Err(EditError::RouteNotFound { src, dst }),
    }
}
