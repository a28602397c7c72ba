use crate::catalog::Catalog;
use crate::domain::contact::ContactInquiry;
use crate::domain::listing::{
    clamp_page, compute_view, featured_properties, FilterCriteria, MinBedrooms, PriceRange,
    SortBy, TypeFilter,
};
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, stylesheet_response, ResultResp};
use crate::templates::pages::{self, ContactFormState};
use astra::Request;
use std::io::Read;

/// Upper bound on a contact form body. Anything larger is refused.
pub(crate) const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let featured = featured_properties(catalog.properties());
            html_response(pages::home_page(&featured))
        }
        ("GET", "/about") => html_response(pages::about_page()),
        ("GET", "/education") => html_response(pages::education_page()),
        ("GET", "/success-stories") => html_response(pages::success_stories_page()),
        ("GET", "/contact") => html_response(pages::contact_page(&ContactFormState::Blank)),
        ("POST", "/contact") => submit_contact(req),
        ("GET", "/properties") => {
            let criteria = criteria_from_query(req.uri().query().unwrap_or_default());
            list_properties(catalog, criteria)
        }
        ("GET", "/static/main.css") => stylesheet_response(),
        ("GET", p) if p.starts_with("/properties/") => show_property(catalog, p),
        _ => Err(ServerError::NotFound),
    }
}

/// Reads listing criteria from the query string. Missing or unknown values
/// fall back to the defaults.
pub fn criteria_from_query(query: &str) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "price" => criteria.price_range = PriceRange::from_param(&value),
            "type" => criteria.property_type = TypeFilter::from_param(&value),
            "beds" => criteria.min_bedrooms = MinBedrooms::from_param(&value),
            "sort" => criteria.sort_by = SortBy::from_param(&value),
            "page" => criteria.page = value.trim().parse().unwrap_or(1),
            _ => {}
        }
    }

    criteria
}

fn list_properties(catalog: &Catalog, mut criteria: FilterCriteria) -> ResultResp {
    let mut view = compute_view(catalog.properties(), &criteria);

    let page = clamp_page(criteria.page, view.total_pages);
    if page != criteria.page {
        tracing::debug!(requested = criteria.page, page, "clamped listing page");
        criteria.page = page;
        view = compute_view(catalog.properties(), &criteria);
    }

    html_response(pages::properties_page(&view, &criteria))
}

fn show_property(catalog: &Catalog, path: &str) -> ResultResp {
    let id = path
        .strip_prefix("/properties/")
        .and_then(|raw| raw.parse::<u32>().ok())
        .ok_or(ServerError::NotFound)?;

    let (property, detail) = catalog.find(id).ok_or(ServerError::NotFound)?;
    html_response(pages::property_detail_page(property, detail))
}

fn submit_contact(req: Request) -> ResultResp {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        tracing::warn!(limit = MAX_FORM_BYTES, "contact form over size limit");
        return Err(ServerError::BadRequest("Form too large".to_string()));
    }

    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&body).into_owned().collect();
    let inquiry = ContactInquiry::from_form(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let problems = inquiry.validate();
    if !problems.is_empty() {
        return html_response_with_status(
            422,
            pages::contact_page(&ContactFormState::Invalid { inquiry, problems }),
        );
    }

    // Nothing is stored; the log is the record of the inquiry.
    tracing::info!(
        name = %inquiry.name,
        email = %inquiry.email,
        phone = ?inquiry.phone,
        subject = inquiry.subject,
        message_len = inquiry.message.len(),
        "contact inquiry received"
    );

    html_response(pages::contact_page(&ContactFormState::Sent {
        name: inquiry.name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::PropertyType;

    #[test]
    fn empty_query_gives_defaults() {
        assert_eq!(criteria_from_query(""), FilterCriteria::default());
    }

    #[test]
    fn reads_every_parameter() {
        let criteria =
            criteria_from_query("price=200k-300k&type=townhouse&beds=3&sort=price-desc&page=2");
        assert_eq!(criteria.price_range, PriceRange::From200kTo300k);
        assert_eq!(criteria.property_type, TypeFilter::Only(PropertyType::Townhouse));
        assert_eq!(criteria.min_bedrooms, MinBedrooms::Three);
        assert_eq!(criteria.sort_by, SortBy::PriceDesc);
        assert_eq!(criteria.page, 2);
    }

    #[test]
    fn decodes_display_labels() {
        let criteria = criteria_from_query("price=%24200k+-+%24300k&sort=Price%3A+Low+to+High&beds=4%2B");
        assert_eq!(criteria.price_range, PriceRange::From200kTo300k);
        assert_eq!(criteria.sort_by, SortBy::PriceAsc);
        assert_eq!(criteria.min_bedrooms, MinBedrooms::Four);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let criteria = criteria_from_query("price=cheap&type=igloo&beds=lots&sort=vibes&page=-4");
        assert_eq!(criteria, FilterCriteria::default());
    }
}
