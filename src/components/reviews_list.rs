use leptos::*;
use crate::components::dropdown_menu::DropdownMenu;
use crate::components::review_triggers::{DeleteReviewButton, EditReviewButton};
use crate::models::review::ReviewListing;
use crate::state::menu::MenuController;

/// Renders a 1..=5 rating as filled and empty stars.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn ReviewsList(reviews: Vec<ReviewListing>) -> impl IntoView {
    let prefix = expect_context::<MenuController>().prefix();

    view! {
        <div>
            <h3>{ "Reviews" }</h3>
            <ul class="divide-y">
                {
                    reviews.into_iter().map(|review| {
                        let menu = review.editable.then(|| {
                            let menu_id = format!("{}{}", prefix, review.id);
                            let ReviewListing { id, event_id, event_name, rating, review_text, .. } = review.clone();
                            view! {
                                <DropdownMenu id=menu_id label="⋮">
                                    <EditReviewButton
                                        review_id=id.clone()
                                        event_id=event_id
                                        event_name=event_name
                                        rating=rating
                                        review_text=review_text
                                    />
                                    <DeleteReviewButton review_id=id/>
                                </DropdownMenu>
                            }
                        });
                        view! {
                            <li class="flex items-start justify-between py-3">
                                <div>
                                    <p class="text-sm font-medium">
                                        { review.user } " · " { review.created_at }
                                    </p>
                                    <p class="text-yellow-500" title=format!("{}/5", review.rating)>
                                        { stars(review.rating) }
                                    </p>
                                    <p class="text-sm">{ review.review_text }</p>
                                </div>
                                {menu}
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}
