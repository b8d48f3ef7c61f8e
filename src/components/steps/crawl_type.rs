// ABOUTME: Crawl type step: two mutually exclusive crawl kinds

use super::StepForm;
use crate::app::state::Field;
use crate::models::{CrawlData, CrawlType};

pub fn build(form: &mut StepForm<'_>, data: &CrawlData) {
    form.section("What kind of crawl do you want to run?");
    form.blank();

    for choice in CrawlType::choices() {
        form.radio(
            Field::CrawlType(*choice),
            data.crawl_type == *choice,
            choice.title(),
            Some(choice.badge()),
        );
        form.note(choice.description());
        form.note(choice.hint());
        form.blank();
    }

    if !data.crawl_type.is_set() {
        form.note("No crawl type selected yet. You can still continue and come back later.");
    }
}
