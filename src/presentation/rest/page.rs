use maud::{DOCTYPE, Markup, html};

use crate::domain::profile::ProfileView;

const AVATAR_CLASS: &str = "w-32 h-32 rounded-full absolute left-0 right-0 \
    m-auto -bottom-16 ring-4 ring-white object-cover";

fn layout(title: &str, body: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta
                    name="viewport"
                    content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
}

pub fn profile(view: &ProfileView) -> Markup {
    let body = html! {
        div class="flex gap-6 pt-6" {
            div class="hidden xl:block w-[20%]" {
                aside data-component="left-menu" data-type="profile" {}
            }
            div class="w-full lg:w-[70%] xl:w-[50%]" {
                div class="flex flex-col gap-6" {
                    (header(view))
                    section
                        data-component="feed"
                        data-username=(view.username) {}
                }
            }
            div class="hidden lg:block w-[30%]" {
                (right_menu(view))
            }
        }
    };

    layout(&view.display_name, &body)
}

fn header(view: &ProfileView) -> Markup {
    let stats = [
        (view.stats.posts, "Posts"),
        (view.stats.followers, "Followers"),
        (view.stats.followings, "Following"),
    ];

    html! {
        div class="flex flex-col items-center justify-center" {
            div class="w-full h-64 relative" {
                img
                    src=(view.cover_url)
                    alt="Cover Image"
                    class="rounded-md object-cover";
                img
                    src=(view.avatar_url)
                    alt="User Avatar"
                    width="128"
                    height="128"
                    class=(AVATAR_CLASS);
            }
            h1 class="mt-20 mb-4 text-2xl font-medium" {
                (view.display_name)
            }
            div class="flex items-center justify-center gap-12 mb-4" {
                @for (count, label) in stats {
                    div class="flex flex-col items-center" data-stat=(label) {
                        span class="font-medium" { (count) }
                        span class="text-sm" { (label) }
                    }
                }
            }
        }
    }
}

fn right_menu(view: &ProfileView) -> Markup {
    let user = &view.user;

    html! {
        aside
            data-component="right-menu"
            data-user-id=(user.id.as_str())
            data-username=(user.username)
            data-name=[user.name.as_deref()]
            data-surname=[user.surname.as_deref()]
            data-avatar=[user.avatar.as_deref()]
            data-cover=[user.cover.as_deref()] {}
    }
}

/// Same page for a missing user and for a blocked viewer
pub fn not_found() -> Markup {
    let body = html! {
        div class="flex flex-col items-center justify-center pt-24" {
            h1 class="text-2xl font-medium" { "404" }
            p class="text-sm" { "This page could not be found." }
        }
    };

    layout("404: This page could not be found.", &body)
}

/// The cause is logged by the caller, never rendered
pub fn internal_error() -> Markup {
    let body = html! {
        div class="flex flex-col items-center justify-center pt-24" {
            h1 class="text-2xl font-medium" { "500" }
            p class="text-sm" { "Internal Server Error" }
        }
    };

    layout("500: Internal Server Error", &body)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::user::{User, UserProfile, UserStats};

    fn view() -> ProfileView {
        ProfileView::from(UserProfile {
            user: User {
                id: "user_alice".into(),
                username: "alice".to_string(),
                name: Some("<Alice>".to_string()),
                surname: Some("Liddell".to_string()),
                avatar: None,
                cover: None,
            },
            stats: UserStats {
                posts: 12,
                followers: 34,
                followings: 56,
            },
        })
    }

    #[test]
    fn renders_header_and_stats() {
        let html = profile(&view()).into_string();

        assert!(html.contains("&lt;Alice&gt; Liddell"));
        assert!(html.contains(r#"src="/noCover.png""#));
        assert!(html.contains(r#"src="/noAvatar.png""#));
        assert!(html.contains(r#"<span class="font-medium">12</span>"#));
        assert!(html.contains(r#"<span class="font-medium">34</span>"#));
        assert!(html.contains(r#"<span class="font-medium">56</span>"#));
    }

    #[test]
    fn mounts_side_components() {
        let html = profile(&view()).into_string();

        assert!(html.contains(
            r#"data-component="left-menu" data-type="profile""#
        ));
        assert!(
            html.contains(r#"data-component="feed" data-username="alice""#)
        );
        assert!(html.contains(r#"data-user-id="user_alice""#));
        assert!(!html.contains("data-avatar"));
    }

    #[test]
    fn error_pages_carry_no_profile_data() {
        let html = internal_error().into_string();

        assert!(html.contains("Internal Server Error"));
        assert!(!html.contains("data-component"));
    }
}
