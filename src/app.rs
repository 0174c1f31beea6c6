// ============================================================================
// APP - Raíz de la aplicación
// ============================================================================
// SessionContextProvider arriba del todo para que navbar, guard y páginas
// compartan la misma sesión; debajo, el shell con la ruta activa.
// ============================================================================

use yew::prelude::*;

use crate::components::{Footer, Navbar, ProtectedRoute};
use crate::hooks::session_context::SessionContextProvider;
use crate::hooks::use_route::use_route;
use crate::router::Route;
use crate::views::{
    BookingFormPage, CustomerBookingsPage, DashboardPage, FullProfilePage, HomePage, LoginPage,
    NotFoundPage, PhotographerBookingsPage, PhotographerDetailPage, PhotographersPage,
    PortfolioPage, ProfileEditPage, ProfileManagePage, RegisterPage, UnauthorizedPage,
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <Shell />
        </SessionContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route();

    html! {
        <>
            <Navbar />
            <main class="app-main">
                <ProtectedRoute access={route.access()}>
                    { switch(&route) }
                </ProtectedRoute>
            </main>
            <Footer />
        </>
    }
}

fn switch(route: &Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Photographers => html! { <PhotographersPage /> },
        Route::PhotographerDetail { id } => {
            html! { <PhotographerDetailPage id={id.clone()} /> }
        }
        Route::PhotographerFullProfile { id } => {
            html! { <FullProfilePage id={id.clone()} /> }
        }
        Route::BookingForm { id } => html! { <BookingFormPage id={id.clone()} /> },
        Route::CustomerBookings => html! { <CustomerBookingsPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::PhotographerBookings => html! { <PhotographerBookingsPage /> },
        Route::Portfolio => html! { <PortfolioPage /> },
        Route::ProfileEdit => html! { <ProfileEditPage /> },
        Route::ProfileManage => html! { <ProfileManagePage /> },
        Route::Unauthorized => html! { <UnauthorizedPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
